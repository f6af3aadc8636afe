//! Sync Errors
//!
//! There is one error kind: a remote operation failed. The cause records why.

use std::fmt;

use thiserror::Error;

/// Result alias for remote collection operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Which remote operation was attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchAll,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::FetchAll => "fetch-all",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Why the remote operation failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),
    /// The resource answered with a non-success status
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body could not be decoded
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// A remote operation failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("remote {operation} failed: {cause}")]
pub struct SyncError {
    pub operation: Operation,
    #[source]
    pub cause: FailureCause,
}

impl SyncError {
    pub fn new(operation: Operation, cause: FailureCause) -> Self {
        Self { operation, cause }
    }

    pub fn transport(operation: Operation, message: impl fmt::Display) -> Self {
        Self::new(operation, FailureCause::Transport(message.to_string()))
    }

    pub fn status(operation: Operation, status: u16) -> Self {
        Self::new(operation, FailureCause::Status(status))
    }

    pub fn malformed(operation: Operation, message: impl fmt::Display) -> Self {
        Self::new(operation, FailureCause::Malformed(message.to_string()))
    }
}
