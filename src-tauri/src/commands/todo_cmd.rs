//! Tauri Commands for the Todo collection
//!
//! Exposes list/create/update/delete to the frontend via Tauri IPC.

use tauri::State;
use crate::domain::Todo;
use crate::repository::Repository;
use crate::AppState;

/// List all todos in insertion order
#[tauri::command]
pub async fn list_todos(state: State<'_, AppState>) -> Result<Vec<Todo>, String> {
    state.todo_repo.list().await.map_err(|e| e.to_string())
}

/// Create a todo; the database assigns the id
#[tauri::command]
pub async fn create_todo(state: State<'_, AppState>, text: String) -> Result<Todo, String> {
    let created = state.todo_repo
        .create(&Todo::unsaved(text))
        .await
        .map_err(|e| e.to_string())?;
    log::debug!("created todo {}", created.id);
    Ok(created)
}

/// Replace the text of a todo
#[tauri::command]
pub async fn update_todo(state: State<'_, AppState>, id: u32, text: String) -> Result<Todo, String> {
    state.todo_repo
        .update(&Todo::new(id, text))
        .await
        .map_err(|e| {
            log::warn!("update of todo {} failed: {}", id, e);
            e.to_string()
        })
}

/// Delete a todo (missing ids are ignored)
#[tauri::command]
pub async fn delete_todo(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    state.todo_repo.delete(id).await.map_err(|e| e.to_string())
}
