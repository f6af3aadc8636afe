//! Collection Backend Selection
//!
//! Inside the Tauri shell the SQLite collection is reached through commands;
//! in a plain browser the REST collection is reached on the page origin.

use async_trait::async_trait;
use todo_sync::{HttpTodoResource, SyncResult, Todo, TodoId, TodoResource};

use crate::commands::TauriTodoResource;

/// Fallback REST origin when the page has no usable location
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Which collection the page talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    Tauri,
    Http { base_url: String },
}

impl BackendConfig {
    /// Pick the backend for the current page
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::http(DEFAULT_BASE_URL);
        };

        let in_tauri = js_sys::Reflect::has(&window, &"__TAURI__".into()).unwrap_or(false);
        if in_tauri {
            return BackendConfig::Tauri;
        }

        match window.location().origin() {
            Ok(origin) if origin.starts_with("http") => Self::http(origin),
            _ => Self::http(DEFAULT_BASE_URL),
        }
    }

    pub fn http(base_url: impl Into<String>) -> Self {
        BackendConfig::Http { base_url: base_url.into() }
    }

    pub fn connect(&self) -> Backend {
        match self {
            BackendConfig::Tauri => Backend::Tauri(TauriTodoResource),
            BackendConfig::Http { base_url } => Backend::Http(HttpTodoResource::new(base_url.as_str())),
        }
    }
}

/// A connected collection resource
pub enum Backend {
    Tauri(TauriTodoResource),
    Http(HttpTodoResource),
}

#[async_trait(?Send)]
impl TodoResource for Backend {
    async fn fetch_all(&self) -> SyncResult<Vec<Todo>> {
        match self {
            Backend::Tauri(resource) => resource.fetch_all().await,
            Backend::Http(resource) => resource.fetch_all().await,
        }
    }

    async fn create(&self, text: &str) -> SyncResult<Todo> {
        match self {
            Backend::Tauri(resource) => resource.create(text).await,
            Backend::Http(resource) => resource.create(text).await,
        }
    }

    async fn update(&self, id: TodoId, text: &str) -> SyncResult<Todo> {
        match self {
            Backend::Tauri(resource) => resource.update(id, text).await,
            Backend::Http(resource) => resource.update(id, text).await,
        }
    }

    async fn delete(&self, id: TodoId) -> SyncResult<()> {
        match self {
            Backend::Tauri(resource) => resource.delete(id).await,
            Backend::Http(resource) => resource.delete(id).await,
        }
    }
}
