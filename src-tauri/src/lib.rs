//! Todo Sync Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers

use std::path::PathBuf;
use std::sync::Arc;
use tauri::Manager;
use tokio::sync::Mutex;

mod domain;
mod repository;
mod commands;
mod logging;

use repository::{init_db, TodoRepository};

/// Environment variable overriding the database location
pub const DB_PATH_ENV: &str = "TODO_SYNC_DB";

/// Application state shared across commands
pub struct AppState {
    pub todo_repo: TodoRepository,
}

/// Resolve the database path: env override first, then the app data dir
fn get_db_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = std::env::var_os(DB_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    let app_dir = app_handle.path().app_data_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir.join("todos.db"))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    logging::init_logging();

    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let db_path = get_db_path(app.handle())?;
            log::info!("opening database at {}", db_path.display());

            // The frontend fetches the list on mount, so the connection
            // must exist before any window can invoke a command.
            let conn = init_db(&db_path)?;

            app.manage(AppState {
                todo_repo: TodoRepository::new(Arc::new(Mutex::new(conn))),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_todos,
            commands::create_todo,
            commands::update_todo,
            commands::delete_todo,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
