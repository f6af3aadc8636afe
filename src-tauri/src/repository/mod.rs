//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod todo_repo;


pub use traits::Repository;
pub use db::init_db;
pub use todo_repo::TodoRepository;
