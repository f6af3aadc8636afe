//! Remote Collection Resource
//!
//! Defines the abstract interface to the collection that owns the entries.
//! Implementations can talk HTTP, Tauri IPC, or stay in memory.

use async_trait::async_trait;

use crate::error::SyncResult;
use crate::model::{Todo, TodoId};
use crate::state::Event;

/// CRUD access to the remote to-do collection
///
/// Futures are not required to be `Send`; the browser client drives them on
/// a single thread.
#[async_trait(?Send)]
pub trait TodoResource {
    /// Current collection, in the resource's order
    async fn fetch_all(&self) -> SyncResult<Vec<Todo>>;

    /// Create an entry; the returned entry carries the assigned id
    async fn create(&self, text: &str) -> SyncResult<Todo>;

    /// Replace the text of entry `id`
    async fn update(&self, id: TodoId, text: &str) -> SyncResult<Todo>;

    /// Remove entry `id`
    async fn delete(&self, id: TodoId) -> SyncResult<()>;
}

/// A request against the remote collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchAll,
    Create { text: String },
    Update { id: TodoId, text: String },
    Delete { id: TodoId },
}

/// Send `request` and turn a successful response into the event to apply.
///
/// Errors are returned untouched; no retry.
pub async fn execute<R>(resource: &R, request: Request) -> SyncResult<Event>
where
    R: TodoResource + ?Sized,
{
    log::debug!("executing {:?}", request);
    match request {
        Request::FetchAll => {
            let items = resource.fetch_all().await?;
            log::info!("fetched {} todos", items.len());
            Ok(Event::Loaded(items))
        }
        Request::Create { text } => {
            let todo = resource.create(&text).await?;
            log::info!("created todo {}", todo.id);
            Ok(Event::Created(todo))
        }
        Request::Update { id, text } => {
            let todo = resource.update(id, &text).await?;
            log::info!("updated todo {}", id);
            Ok(Event::Updated { target: id, todo })
        }
        Request::Delete { id } => {
            resource.delete(id).await?;
            log::info!("deleted todo {}", id);
            Ok(Event::Deleted(id))
        }
    }
}
