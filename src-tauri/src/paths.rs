//! Storage Locations
//!
//! Todos live in `~/.todo/todos.json` unless `TAURI_TODO_HOME` points
//! elsewhere; the config sits in the platform app-data directory.

use std::path::{Path, PathBuf};

use crate::domain::{DomainError, DomainResult};

/// Overrides the todo directory
pub const TODO_HOME_ENV: &str = "TAURI_TODO_HOME";

pub const TODOS_FILE: &str = "todos.json";
pub const CONFIG_FILE: &str = "config.json";

/// Directory holding `todos.json`
pub fn todo_dir() -> DomainResult<PathBuf> {
    resolve_todo_dir(std::env::var_os(TODO_HOME_ENV).map(PathBuf::from), dirs::home_dir())
}

fn resolve_todo_dir(override_dir: Option<PathBuf>, home: Option<PathBuf>) -> DomainResult<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    home.map(|h| h.join(".todo"))
        .ok_or_else(|| DomainError::NotFound("user home directory".to_string()))
}

pub fn todos_file(todo_dir: &Path) -> PathBuf {
    todo_dir.join(TODOS_FILE)
}

pub fn config_file(app_data_dir: &Path) -> PathBuf {
    app_data_dir.join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_fallback() {
        let dir = resolve_todo_dir(None, Some(PathBuf::from("/home/me"))).unwrap();
        assert_eq!(dir, PathBuf::from("/home/me/.todo"));
        assert_eq!(todos_file(&dir), PathBuf::from("/home/me/.todo/todos.json"));
    }

    #[test]
    fn test_override_wins() {
        let dir = resolve_todo_dir(Some(PathBuf::from("/data/todo")), Some(PathBuf::from("/home/me"))).unwrap();
        assert_eq!(dir, PathBuf::from("/data/todo"));
    }

    #[test]
    fn test_empty_override_ignored() {
        let dir = resolve_todo_dir(Some(PathBuf::new()), Some(PathBuf::from("/home/me"))).unwrap();
        assert_eq!(dir, PathBuf::from("/home/me/.todo"));
    }

    #[test]
    fn test_no_home_is_error() {
        assert!(matches!(resolve_todo_dir(None, None), Err(DomainError::NotFound(_))));
    }
}
