//! Todo Sync Core
//!
//! Keeps a client-side to-do list consistent with a remote collection.
//!
//! Layout:
//! - model: the `Todo` entry as it travels over the wire
//! - state: `ControllerState` and the pure event transitions
//! - resource: the `TodoResource` seam plus request execution
//! - controller: `ListSyncController`, state + resource glued together
//! - http: REST implementation of `TodoResource`

mod controller;
mod error;
mod http;
mod model;
mod resource;
mod state;

#[cfg(test)]
mod testing;

pub use controller::ListSyncController;
pub use error::{FailureCause, Operation, SyncError, SyncResult};
pub use http::HttpTodoResource;
pub use model::{Todo, TodoId};
pub use resource::{execute, Request, TodoResource};
pub use state::{ControllerState, Event, Mode};
