//! Todo Repository Implementation
//!
//! SQLite-backed implementation of Repository<Todo>

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Todo};
use super::traits::Repository;

/// SQLite implementation of Todo repository
#[derive(Clone)]
pub struct TodoRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TodoRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Todo> for TodoRepository {
    async fn create(&self, entity: &Todo) -> DomainResult<Todo> {
        let conn = self.conn.lock().await;

        conn.execute("INSERT INTO todos (text) VALUES (?1)", params![entity.text])
            .map_err(internal)?;

        let id = u32::try_from(conn.last_insert_rowid())
            .map_err(|_| DomainError::Internal("Assigned id out of range".to_string()))?;

        Ok(Todo::new(id, entity.text.clone()))
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Todo>> {
        let conn = self.conn.lock().await;

        conn.query_row(
            "SELECT id, text FROM todos WHERE id = ?1",
            params![id],
            row_to_todo,
        )
        .optional()
        .map_err(internal)
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn
            .prepare("SELECT id, text FROM todos ORDER BY id ASC")
            .map_err(internal)?;
        let rows = stmt.query_map([], row_to_todo).map_err(internal)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(internal)
    }

    async fn update(&self, entity: &Todo) -> DomainResult<Todo> {
        let conn = self.conn.lock().await;

        let changed = conn
            .execute(
                "UPDATE todos SET text = ?1 WHERE id = ?2",
                params![entity.text, entity.id],
            )
            .map_err(internal)?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Todo {}", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        conn.execute("DELETE FROM todos WHERE id = ?1", params![id])
            .map_err(internal)?;

        Ok(())
    }
}

fn internal(err: rusqlite::Error) -> DomainError {
    DomainError::Internal(err.to_string())
}

/// Convert a database row to Todo
fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        text: row.get(1)?,
    })
}
