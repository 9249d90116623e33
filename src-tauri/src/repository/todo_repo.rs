//! Todo Repository Implementation
//!
//! `todos.json` backed implementation of TodoRepository. Every operation
//! reads the file, applies the change and writes it back pretty-printed.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::traits::TodoRepository;
use crate::domain::{DomainError, DomainResult, StoredTodo, Todo, TodoFile};

pub struct JsonTodoRepository {
    path: PathBuf,
}

impl JsonTodoRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory and an empty `todos.json` if missing
    pub async fn initialize(&self) -> DomainResult<()> {
        if !fs::try_exists(&self.path).await? {
            log::info!("creating empty todo file at {}", self.path.display());
            self.write_file(&TodoFile::default()).await?;
        }
        Ok(())
    }

    async fn read_file(&self) -> DomainResult<TodoFile> {
        if !fs::try_exists(&self.path).await? {
            return Ok(TodoFile::default());
        }
        let content = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn write_file(&self, file: &TodoFile) -> DomainResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }
        let json = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for JsonTodoRepository {
    async fn list(&self) -> DomainResult<Vec<Todo>> {
        let file = self.read_file().await?;
        Ok(file.items.iter().map(Todo::from).collect())
    }

    async fn add(&self, text: &str) -> DomainResult<Todo> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::InvalidInput("todo text is empty".to_string()));
        }

        let mut file = self.read_file().await?;
        let stored = StoredTodo::new(file.next_id()?, text.to_string());
        let todo = Todo::from(&stored);
        file.items.push(stored);
        self.write_file(&file).await?;
        Ok(todo)
    }

    async fn toggle(&self, id: u32) -> DomainResult<Todo> {
        let mut file = self.read_file().await?;
        let stored = file
            .items
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("todo {}", id)))?;
        stored.toggle();
        let todo = Todo::from(&*stored);

        self.write_file(&file).await?;
        Ok(todo)
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut file = self.read_file().await?;
        let before = file.items.len();
        file.items.retain(|t| t.id != id);
        if file.items.len() == before {
            return Err(DomainError::NotFound(format!("todo {}", id)));
        }
        self.write_file(&file).await
    }

    async fn clear_completed(&self) -> DomainResult<usize> {
        let mut file = self.read_file().await?;
        let before = file.items.len();
        file.items.retain(|t| !t.completed);
        let removed = before - file.items.len();
        self.write_file(&file).await?;
        Ok(removed)
    }
}
