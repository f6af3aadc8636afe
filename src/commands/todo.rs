//! Todo Commands
//!
//! `TodoResource` over the backend's todo commands.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use todo_sync::{Operation, SyncError, SyncResult, Todo, TodoId, TodoResource};
use super::{invoke, rejection_message};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct TextArgs<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: TodoId,
}

#[derive(Serialize)]
struct UpdateArgs<'a> {
    id: TodoId,
    text: &'a str,
}

// ========================
// Commands
// ========================

/// The SQLite collection owned by the Tauri shell
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriTodoResource;

async fn call<A, T>(operation: Operation, cmd: &str, args: Option<&A>) -> SyncResult<T>
where
    A: Serialize,
    T: DeserializeOwned,
{
    let js_args = match args {
        Some(args) => serde_wasm_bindgen::to_value(args)
            .map_err(|e| SyncError::transport(operation, e))?,
        None => JsValue::NULL,
    };
    let result = invoke(cmd, js_args)
        .await
        .map_err(|e| SyncError::transport(operation, rejection_message(&e)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| SyncError::malformed(operation, e))
}

#[async_trait(?Send)]
impl TodoResource for TauriTodoResource {
    async fn fetch_all(&self) -> SyncResult<Vec<Todo>> {
        call::<(), _>(Operation::FetchAll, "list_todos", None).await
    }

    async fn create(&self, text: &str) -> SyncResult<Todo> {
        call(Operation::Create, "create_todo", Some(&TextArgs { text })).await
    }

    async fn update(&self, id: TodoId, text: &str) -> SyncResult<Todo> {
        call(Operation::Update, "update_todo", Some(&UpdateArgs { id, text })).await
    }

    async fn delete(&self, id: TodoId) -> SyncResult<()> {
        call(Operation::Delete, "delete_todo", Some(&IdArgs { id })).await
    }
}
