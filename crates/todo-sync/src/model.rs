//! Todo Model
//!
//! The entry shape shared with every collection backend.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote collection. Never minted client-side.
pub type TodoId = u32;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
}

impl Todo {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}
