//! Todo Entity
//!
//! A single to-do entry. The id is assigned by the database.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A to-do entry as stored and as sent to the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier (0 until stored)
    pub id: u32,
    /// Entry text
    pub text: String,
}

impl Todo {
    pub fn new(id: u32, text: String) -> Self {
        Self { id, text }
    }

    /// An entry that has not been stored yet
    pub fn unsaved(text: String) -> Self {
        Self::new(0, text)
    }
}

impl Entity for Todo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
