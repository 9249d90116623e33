//! Repository Layer
//!
//! Data access abstractions and implementations.

mod config_repo;
mod todo_repo;
mod traits;


pub use config_repo::JsonConfigRepository;
pub use todo_repo::JsonTodoRepository;
pub use traits::{ConfigRepository, TodoRepository};
