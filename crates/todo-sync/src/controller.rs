//! ListSyncController
//!
//! Owns a `ControllerState` and routes every mutation through the remote
//! collection. A failed request leaves the state exactly as it was.

use crate::error::SyncResult;
use crate::model::{Todo, TodoId};
use crate::resource::{execute, Request, TodoResource};
use crate::state::{ControllerState, Event};

/// Headless driver: runs each request to completion before the next.
///
/// The browser client does not hold one of these; it runs `execute` and
/// applies the returned event to its own state signal, so several requests
/// can be in flight at once.
pub struct ListSyncController<R: TodoResource> {
    resource: R,
    state: ControllerState,
}

impl<R: TodoResource> ListSyncController<R> {
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            state: ControllerState::new(),
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Load the collection. Replaces `items` on success only.
    pub async fn initialize(&mut self) -> SyncResult<()> {
        self.run(Request::FetchAll).await
    }

    /// Create or update depending on whether an entry is being edited
    pub async fn submit(&mut self) -> SyncResult<()> {
        let request = self.state.submit_request();
        self.run(request).await
    }

    pub fn begin_edit(&mut self, todo: Todo) {
        self.state.apply_mut(Event::EditBegan(todo));
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.apply_mut(Event::DraftChanged(text.into()));
    }

    pub async fn delete(&mut self, id: TodoId) -> SyncResult<()> {
        self.run(Request::Delete { id }).await
    }

    async fn run(&mut self, request: Request) -> SyncResult<()> {
        let event = execute(&self.resource, request).await?;
        self.state.apply_mut(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FailureCause, Operation};
    use crate::testing::MemoryResource;

    async fn loaded(resource: MemoryResource) -> ListSyncController<MemoryResource> {
        let mut controller = ListSyncController::new(resource);
        controller.initialize().await.expect("initialize failed");
        controller
    }

    #[tokio::test]
    async fn test_initialize_replaces_items_in_order() {
        let resource = MemoryResource::seeded(&["walk dog", "buy milk", "file taxes"]);
        let controller = loaded(resource).await;

        let texts: Vec<_> = controller.state().items.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["walk dog", "buy milk", "file taxes"]);
    }

    #[tokio::test]
    async fn test_initialize_failure_leaves_items_empty() {
        let resource = MemoryResource::seeded(&["a"]);
        resource.fail_next(Operation::FetchAll);
        let mut controller = ListSyncController::new(resource);

        let err = controller.initialize().await.unwrap_err();
        assert_eq!(err.operation, Operation::FetchAll);
        assert!(controller.state().items.is_empty());
    }

    #[tokio::test]
    async fn test_create_into_empty_list() {
        let mut controller = loaded(MemoryResource::new()).await;
        controller.set_draft("Buy milk");
        controller.submit().await.unwrap();

        assert_eq!(controller.state().items, vec![Todo::new(1, "Buy milk")]);
        assert!(controller.state().draft_text.is_empty());
        assert_eq!(controller.resource().create_calls(), 1);
    }

    #[tokio::test]
    async fn test_create_uses_server_text() {
        let resource = MemoryResource::new().with_text_rewrite(|text| text.trim().to_string());
        let mut controller = loaded(resource).await;
        controller.set_draft("  padded  ");
        controller.submit().await.unwrap();

        assert_eq!(controller.state().items.len(), 1);
        assert_eq!(controller.state().items[0].text, "padded");
    }

    #[tokio::test]
    async fn test_create_failure_keeps_draft_and_items() {
        let resource = MemoryResource::seeded(&["a"]);
        let mut controller = loaded(resource).await;
        controller.set_draft("b");
        controller.resource().fail_next(Operation::Create);

        let before = controller.state().clone();
        let err = controller.submit().await.unwrap_err();
        assert_eq!(err.cause, FailureCause::Status(500));
        assert_eq!(controller.state(), &before);
    }

    #[tokio::test]
    async fn test_edit_then_submit_updates_in_place() {
        let mut controller = loaded(MemoryResource::seeded(&["Buy milk"])).await;
        let item = controller.state().items[0].clone();

        controller.begin_edit(item.clone());
        assert_eq!(controller.state().draft_text, "Buy milk");
        assert_eq!(controller.state().editing, Some(item));

        controller.set_draft("Buy oat milk");
        controller.submit().await.unwrap();

        assert_eq!(controller.state().items, vec![Todo::new(1, "Buy oat milk")]);
        assert_eq!(controller.state().editing, None);
        assert!(controller.state().draft_text.is_empty());
        assert_eq!(controller.resource().create_calls(), 0);
    }

    #[tokio::test]
    async fn test_update_keeps_length_and_position() {
        let mut controller = loaded(MemoryResource::seeded(&["a", "b", "c"])).await;
        let middle = controller.state().items[1].clone();

        controller.begin_edit(middle);
        controller.set_draft("B");
        controller.submit().await.unwrap();

        let texts: Vec<_> = controller.state().items.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "B", "c"]);
    }

    #[tokio::test]
    async fn test_unmodified_edit_sends_original_text() {
        let mut controller = loaded(MemoryResource::seeded(&["same"])).await;
        let item = controller.state().items[0].clone();

        controller.begin_edit(item);
        controller.submit().await.unwrap();

        assert_eq!(controller.resource().last_update(), Some((1, "same".to_string())));
        assert_eq!(controller.state().items, vec![Todo::new(1, "same")]);
    }

    #[tokio::test]
    async fn test_update_failure_keeps_edit_armed() {
        let mut controller = loaded(MemoryResource::seeded(&["a"])).await;
        let item = controller.state().items[0].clone();
        controller.begin_edit(item.clone());
        controller.set_draft("A");
        controller.resource().fail_next(Operation::Update);

        assert!(controller.submit().await.is_err());
        assert_eq!(controller.state().editing, Some(item));
        assert_eq!(controller.state().draft_text, "A");
        assert_eq!(controller.state().items, vec![Todo::new(1, "a")]);
    }

    #[tokio::test]
    async fn test_update_response_for_vanished_entry_changes_nothing() {
        // Edit is armed, then a concurrent delete lands before the update
        // response is applied.
        let mut controller = loaded(MemoryResource::seeded(&["a", "b"])).await;
        let first = controller.state().items[0].clone();
        controller.begin_edit(first);
        controller.set_draft("A");

        let request = controller.state().submit_request();
        let event = execute(controller.resource(), request).await.unwrap();
        controller.delete(1).await.unwrap();
        let before = controller.state().items.clone();

        let mut state = controller.state().clone();
        state.apply_mut(event);
        assert_eq!(state.items, before);
        assert_eq!(state.items, vec![Todo::new(2, "b")]);
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let mut controller = loaded(MemoryResource::seeded(&["a", "b"])).await;
        controller.delete(1).await.unwrap();

        assert_eq!(controller.state().items, vec![Todo::new(2, "b")]);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_items() {
        let mut controller = loaded(MemoryResource::seeded(&["a", "b"])).await;
        controller.resource().fail_next(Operation::Delete);

        assert!(controller.delete(1).await.is_err());
        assert_eq!(controller.state().items.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_of_edited_entry_falls_back_to_create() {
        let mut controller = loaded(MemoryResource::seeded(&["a"])).await;
        let item = controller.state().items[0].clone();
        controller.begin_edit(item);
        controller.delete(1).await.unwrap();

        controller.submit().await.unwrap();
        assert_eq!(controller.state().items, vec![Todo::new(2, "a")]);
    }

    #[tokio::test]
    async fn test_double_submit_creates_twice() {
        let mut controller = loaded(MemoryResource::new()).await;
        let request = {
            controller.set_draft("twice");
            controller.state().submit_request()
        };

        let first = execute(controller.resource(), request.clone()).await.unwrap();
        let second = execute(controller.resource(), request).await.unwrap();
        let mut state = controller.state().clone();
        state.apply_mut(first);
        state.apply_mut(second);

        assert_eq!(state.items, vec![Todo::new(1, "twice"), Todo::new(2, "twice")]);
    }
}
