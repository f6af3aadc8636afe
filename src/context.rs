//! Application Context
//!
//! The list state plus the backend config, provided via the Leptos Context
//! API. Every remote response is applied to the state as it is when the
//! response arrives.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{execute, ControllerState, Event, Request, Todo, TodoId};

use crate::backend::BackendConfig;

/// App-wide list state provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Items, draft text and edit target
    pub state: RwSignal<ControllerState>,
    backend: StoredValue<BackendConfig>,
}

impl TodoContext {
    pub fn new(backend: BackendConfig) -> Self {
        Self {
            state: RwSignal::new(ControllerState::new()),
            backend: StoredValue::new(backend),
        }
    }

    /// Apply one event to the state
    pub fn dispatch(&self, event: Event) {
        self.state.update(|state| state.apply_mut(event));
    }

    /// Fetch the collection once
    pub fn initialize(&self) {
        self.run(Request::FetchAll);
    }

    /// Create or update from the current draft
    pub fn submit(&self) {
        let request = self.state.with_untracked(|state| state.submit_request());
        self.run(request);
    }

    pub fn begin_edit(&self, todo: Todo) {
        self.dispatch(Event::EditBegan(todo));
    }

    pub fn set_draft(&self, text: String) {
        self.dispatch(Event::DraftChanged(text));
    }

    pub fn delete(&self, id: TodoId) {
        self.run(Request::Delete { id });
    }

    /// Send a request without blocking; the state changes only on success.
    /// Failures go to the console and nothing else.
    fn run(&self, request: Request) {
        let ctx = *self;
        spawn_local(async move {
            let backend = ctx.backend.with_value(|config| config.connect());
            match execute(&backend, request).await {
                Ok(event) => ctx.dispatch(event),
                Err(err) => web_sys::console::error_1(&format!("[TODO] {}", err).into()),
            }
        });
    }
}
