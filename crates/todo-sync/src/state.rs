//! Controller State
//!
//! All client-side list state lives in `ControllerState`. It only changes by
//! applying an `Event`, and `apply` is pure: it takes the current state and
//! returns the next one. Remote responses are applied to whatever the state
//! is when they arrive.

use crate::model::{Todo, TodoId};
use crate::resource::Request;

/// Whether the next submit creates or updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Editing(TodoId),
}

/// The client's working state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerState {
    /// Entries in arrival order
    pub items: Vec<Todo>,
    /// Live content of the edit field
    pub draft_text: String,
    /// Entry the next submit will update
    pub editing: Option<Todo>,
}

/// One discrete change to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Initial fetch completed
    Loaded(Vec<Todo>),
    /// User typed in the edit field
    DraftChanged(String),
    /// User armed edit mode for an entry
    EditBegan(Todo),
    /// Create request succeeded
    Created(Todo),
    /// Update request for `target` succeeded
    Updated { target: TodoId, todo: Todo },
    /// Delete request succeeded
    Deleted(TodoId),
}

impl ControllerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        match &self.editing {
            Some(todo) => Mode::Editing(todo.id),
            None => Mode::Idle,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// The request a submit would send right now.
    ///
    /// The draft is sent as-is, empty or not.
    pub fn submit_request(&self) -> Request {
        let text = self.draft_text.clone();
        match &self.editing {
            Some(todo) => Request::Update { id: todo.id, text },
            None => Request::Create { text },
        }
    }

    /// Apply one event and return the resulting state
    pub fn apply(mut self, event: Event) -> Self {
        match event {
            Event::Loaded(items) => {
                self.items = items;
            }
            Event::DraftChanged(text) => {
                self.draft_text = text;
            }
            Event::EditBegan(todo) => {
                self.draft_text = todo.text.clone();
                self.editing = Some(todo);
            }
            Event::Created(todo) => {
                self.items.push(todo);
                self.draft_text.clear();
            }
            Event::Updated { target, todo } => {
                // No entry with `target` means nothing is replaced.
                if let Some(slot) = self.items.iter_mut().find(|item| item.id == target) {
                    *slot = todo;
                }
                self.editing = None;
                self.draft_text.clear();
            }
            Event::Deleted(id) => {
                self.items.retain(|item| item.id != id);
                if self.editing.as_ref().is_some_and(|todo| todo.id == id) {
                    self.editing = None;
                }
            }
        }
        self
    }

    /// In-place variant of `apply` for holders that only have `&mut`
    pub fn apply_mut(&mut self, event: Event) {
        let current = std::mem::take(self);
        *self = current.apply(event);
    }

    pub fn find(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|item| item.id == id)
    }
}
