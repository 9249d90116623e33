//! Domain Layer
//!
//! Todo and configuration entities plus the errors shared by every layer.
//! Depends only on serde and thiserror.

mod config;
mod error;
mod todo;

pub use config::AppConfig;
pub use error::{DomainError, DomainResult};
pub use todo::{StoredTodo, Todo, TodoFile};
