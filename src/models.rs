//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Language used when the backend has none configured
pub const DEFAULT_LANGUAGE: &str = "zh";

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

/// Which subset of the list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterType {
    /// Display order of the filter buttons
    pub const ALL: [FilterType; 3] = [FilterType::All, FilterType::Active, FilterType::Completed];

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            FilterType::All => true,
            FilterType::Active => !todo.completed,
            FilterType::Completed => todo.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterType::All => "all",
            FilterType::Active => "active",
            FilterType::Completed => "completed",
        }
    }
}

/// Application configuration (matches backend, camelCase on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub language: String,
    pub llm_base_url: Option<String>,
    pub llm_model: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            language: DEFAULT_LANGUAGE.to_string(),
            llm_base_url: None,
            llm_model: None,
        }
    }
}

impl AppConfig {
    /// Trimmed copy ready to persist: blank optional fields become `None`,
    /// a blank language falls back to the default.
    pub fn normalized(&self) -> Self {
        let language = self.language.trim();
        Self {
            api_key: non_blank(self.api_key.as_deref()),
            language: if language.is_empty() {
                DEFAULT_LANGUAGE.to_string()
            } else {
                language.to_string()
            },
            llm_base_url: non_blank(self.llm_base_url.as_deref()),
            llm_model: non_blank(self.llm_model.as_deref()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Counts derived from the todo list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl Stats {
    pub fn of(todos: &[Todo]) -> Self {
        let completed = todos.iter().filter(|t| t.completed).count();
        Self {
            total: todos.len(),
            active: todos.len() - completed,
            completed,
        }
    }
}

/// Notification flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}
