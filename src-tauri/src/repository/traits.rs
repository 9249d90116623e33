//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use JSON files, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{AppConfig, DomainResult, Todo};

/// Todo list storage
///
/// All operations are async to support various backends.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos in insertion order
    async fn list(&self) -> DomainResult<Vec<Todo>>;

    /// Append a todo; the repository assigns the id
    async fn add(&self, text: &str) -> DomainResult<Todo>;

    /// Flip completion and return the updated todo
    async fn toggle(&self, id: u32) -> DomainResult<Todo>;

    /// Delete todo by ID
    async fn delete(&self, id: u32) -> DomainResult<()>;

    /// Drop every completed todo, returning how many went
    async fn clear_completed(&self) -> DomainResult<usize>;
}

/// Whole-document configuration storage
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Stored config, or the defaults when nothing usable is stored
    async fn load(&self) -> AppConfig;

    /// Replace the stored config
    async fn save(&self, config: &AppConfig) -> DomainResult<()>;
}
