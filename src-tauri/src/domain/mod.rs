//! Domain Layer
//!
//! Contains the domain entities and core abstractions.
//! This layer has NO external dependencies (except serde and thiserror).

mod entity;
mod todo;

pub use entity::{Entity, DomainError, DomainResult};
pub use todo::Todo;
