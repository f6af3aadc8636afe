//! Database Connection and Setup
//!
//! Opens the SQLite database and runs migrations.

use rusqlite::Connection;
use std::path::Path;

use crate::domain::{DomainError, DomainResult};

/// Open the database at `db_path` (":memory:" for an in-memory database)
pub fn init_db(db_path: &Path) -> DomainResult<Connection> {
    let conn = Connection::open(db_path)
        .map_err(|e| DomainError::Internal(format!("Failed to open db: {}", e)))?;

    run_migrations(&conn)?;
    log::info!("database ready at {}", db_path.display());

    Ok(conn)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL
        )",
        (),
    )
    .map_err(|e| DomainError::Internal(format!("Failed to create todos table: {}", e)))?;

    Ok(())
}
