//! In-memory collection used by the tests.
//!
//! Assigns ids the way the server does (monotonic, starting at 1, never
//! reused) and can be told to fail the next call of a given operation.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::error::{Operation, SyncError, SyncResult};
use crate::model::{Todo, TodoId};
use crate::resource::TodoResource;

type TextRewrite = Box<dyn Fn(&str) -> String>;

#[derive(Default)]
struct Inner {
    items: Vec<Todo>,
    next_id: TodoId,
    fail_next: Option<Operation>,
    create_calls: usize,
    last_update: Option<(TodoId, String)>,
}

pub struct MemoryResource {
    inner: RefCell<Inner>,
    rewrite: Option<TextRewrite>,
}

impl MemoryResource {
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(Inner {
                next_id: 1,
                ..Default::default()
            }),
            rewrite: None,
        }
    }

    pub fn seeded(texts: &[&str]) -> Self {
        let resource = Self::new();
        {
            let mut inner = resource.inner.borrow_mut();
            for text in texts {
                let id = inner.next_id;
                inner.next_id += 1;
                inner.items.push(Todo::new(id, *text));
            }
        }
        resource
    }

    /// Server-side normalization applied to stored text
    pub fn with_text_rewrite(mut self, rewrite: impl Fn(&str) -> String + 'static) -> Self {
        self.rewrite = Some(Box::new(rewrite));
        self
    }

    pub fn fail_next(&self, operation: Operation) {
        self.inner.borrow_mut().fail_next = Some(operation);
    }

    pub fn create_calls(&self) -> usize {
        self.inner.borrow().create_calls
    }

    pub fn last_update(&self) -> Option<(TodoId, String)> {
        self.inner.borrow().last_update.clone()
    }

    fn check(&self, operation: Operation) -> SyncResult<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_next == Some(operation) {
            inner.fail_next = None;
            return Err(SyncError::status(operation, 500));
        }
        Ok(())
    }

    fn stored_text(&self, text: &str) -> String {
        match &self.rewrite {
            Some(rewrite) => rewrite(text),
            None => text.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl TodoResource for MemoryResource {
    async fn fetch_all(&self) -> SyncResult<Vec<Todo>> {
        self.check(Operation::FetchAll)?;
        Ok(self.inner.borrow().items.clone())
    }

    async fn create(&self, text: &str) -> SyncResult<Todo> {
        self.check(Operation::Create)?;
        let text = self.stored_text(text);
        let mut inner = self.inner.borrow_mut();
        inner.create_calls += 1;
        let todo = Todo::new(inner.next_id, text);
        inner.next_id += 1;
        inner.items.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: TodoId, text: &str) -> SyncResult<Todo> {
        self.check(Operation::Update)?;
        let text = self.stored_text(text);
        let mut inner = self.inner.borrow_mut();
        inner.last_update = Some((id, text.clone()));
        let slot = inner
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| SyncError::status(Operation::Update, 404))?;
        slot.text = text;
        Ok(slot.clone())
    }

    async fn delete(&self, id: TodoId) -> SyncResult<()> {
        self.check(Operation::Delete)?;
        self.inner.borrow_mut().items.retain(|item| item.id != id);
        Ok(())
    }
}
