//! Todo Entity
//!
//! `StoredTodo` is the record kept in `todos.json`; `Todo` is what the
//! frontend sees.

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};

/// Todo as exchanged with the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

/// Status string kept next to `completed` for other readers of the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            TaskStatus::Completed
        } else {
            TaskStatus::Pending
        }
    }
}

/// On-disk todo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTodo {
    #[serde(rename = "taskId")]
    pub id: u32,
    #[serde(rename = "taskName")]
    pub text: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(rename = "taskDesc", default)]
    pub description: Option<String>,
    #[serde(rename = "dueDate", default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub urgent: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl StoredTodo {
    /// Create a new pending record
    pub fn new(id: u32, text: String) -> Self {
        Self {
            id,
            text,
            status: TaskStatus::Pending,
            description: None,
            due_date: None,
            urgent: None,
            completed: false,
        }
    }

    /// Flip completion, keeping `status` in step
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
        self.status = TaskStatus::from_completed(self.completed);
    }
}

impl From<&StoredTodo> for Todo {
    fn from(stored: &StoredTodo) -> Self {
        Self {
            id: stored.id,
            text: stored.text.clone(),
            completed: stored.completed,
        }
    }
}

/// Contents of `todos.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoFile {
    pub items: Vec<StoredTodo>,
}

impl TodoFile {
    /// Next free id: one past the largest in use
    pub fn next_id(&self) -> DomainResult<u32> {
        let max = self.items.iter().map(|t| t.id).max().unwrap_or(0);
        max.checked_add(1)
            .ok_or_else(|| DomainError::InvalidInput(format!("no todo id left after {}", max)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_is_pending() {
        let todo = StoredTodo::new(1, "Test item".to_string());
        assert_eq!(todo.status, TaskStatus::Pending);
        assert!(!todo.completed);
    }

    #[test]
    fn test_toggle_keeps_status_in_step() {
        let mut todo = StoredTodo::new(1, "Test item".to_string());
        todo.toggle();
        assert!(todo.completed);
        assert_eq!(todo.status, TaskStatus::Completed);
        todo.toggle();
        assert_eq!(todo.status, TaskStatus::Pending);
    }

    #[test]
    fn test_disk_field_names() {
        let json = serde_json::to_value(StoredTodo::new(3, "Write report".to_string())).unwrap();
        assert_eq!(json["taskId"], 3);
        assert_eq!(json["taskName"], "Write report");
        assert_eq!(json["status"], "pending");
        assert!(json["taskDesc"].is_null());
    }

    #[test]
    fn test_sparse_record_reads_with_defaults() {
        let stored: StoredTodo =
            serde_json::from_str(r#"{"taskId": 7, "taskName": "Old entry"}"#).unwrap();
        assert_eq!(stored.id, 7);
        assert!(!stored.completed);
        assert_eq!(Todo::from(&stored).text, "Old entry");
    }

    #[test]
    fn test_next_id() {
        let mut file = TodoFile::default();
        assert_eq!(file.next_id().unwrap(), 1);
        file.items.push(StoredTodo::new(4, "a".to_string()));
        file.items.push(StoredTodo::new(2, "b".to_string()));
        assert_eq!(file.next_id().unwrap(), 5);
    }

    #[test]
    fn test_next_id_exhausted() {
        let file = TodoFile {
            items: vec![StoredTodo::new(u32::MAX, "last".to_string())],
        };
        assert!(matches!(file.next_id(), Err(DomainError::InvalidInput(_))));
    }
}
