//! Todo State Store

use leptos::prelude::*;

use super::Feedback;
use crate::gateway::Gateway;
use crate::i18n::Message;
use crate::models::{FilterType, Stats, Todo};

/// Local mirror of the backend list plus view selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    /// Insertion order, never sorted
    pub todos: Vec<Todo>,
    pub filter: FilterType,
    pub loading: bool,
}

impl TodoState {
    pub fn filtered(&self) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|t| self.filter.matches(t))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> Stats {
        Stats::of(&self.todos)
    }
}

#[derive(Clone)]
pub struct TodoStore {
    gateway: Gateway,
    feedback: Feedback,
    state: ArcRwSignal<TodoState>,
}

impl TodoStore {
    pub fn new(gateway: Gateway, feedback: Feedback) -> Self {
        Self {
            gateway,
            feedback,
            state: ArcRwSignal::new(TodoState::default()),
        }
    }

    /// Untracked copy of the whole state
    #[cfg(test)]
    pub fn snapshot(&self) -> TodoState {
        self.state.get_untracked()
    }

    // ========================
    // Derived views (tracked)
    // ========================

    pub fn filtered_todos(&self) -> Vec<Todo> {
        self.state.with(TodoState::filtered)
    }

    pub fn stats(&self) -> Stats {
        self.state.with(TodoState::stats)
    }

    pub fn filter(&self) -> FilterType {
        self.state.with(|s| s.filter)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    // ========================
    // Operations
    // ========================

    /// Show the loading state before `load` is reached
    pub fn begin_loading(&self) {
        self.state.update(|s| s.loading = true);
    }

    /// Replace the local list with the backend's. On failure the list is
    /// emptied so the view still renders.
    pub async fn load(&self) {
        self.begin_loading();

        match self.gateway.load_todos().await {
            Ok(todos) => {
                tracing::info!(count = todos.len(), "loaded todos");
                self.state.update(|s| {
                    s.todos = todos;
                    s.loading = false;
                });
                self.feedback.success(Message::LoadSucceeded);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load todos");
                self.state.update(|s| {
                    s.todos.clear();
                    s.loading = false;
                });
                self.feedback.error(Message::LoadFailed(e.to_string()));
            }
        }
    }

    /// Returns whether a todo was added. Blank text is ignored silently.
    pub async fn add(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        match self.gateway.add_todo(text).await {
            Ok(todo) => {
                tracing::info!(id = todo.id, "added todo");
                self.state.update(|s| s.todos.push(todo));
                self.feedback.success(Message::AddSucceeded);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to add todo");
                self.feedback.error(Message::AddFailed(e.to_string()));
                false
            }
        }
    }

    /// Flip `completed` once the backend confirms. A missing local record
    /// means the lists already diverged; nothing to do then.
    pub async fn toggle(&self, id: u32) {
        match self.gateway.toggle_todo(id).await {
            Ok(()) => {
                self.state.update(|s| {
                    if let Some(todo) = s.todos.iter_mut().find(|t| t.id == id) {
                        todo.completed = !todo.completed;
                    }
                });
            }
            Err(e) => {
                tracing::error!(id, error = %e, "failed to toggle todo");
                self.feedback.error(Message::ToggleFailed(e.to_string()));
            }
        }
    }

    pub async fn delete(&self, id: u32) {
        match self.gateway.delete_todo(id).await {
            Ok(()) => {
                tracing::info!(id, "deleted todo");
                self.state.update(|s| s.todos.retain(|t| t.id != id));
                self.feedback.success(Message::DeleteSucceeded);
            }
            Err(e) => {
                tracing::error!(id, error = %e, "failed to delete todo");
                self.feedback.error(Message::DeleteFailed(e.to_string()));
            }
        }
    }

    /// Skips the round trip when nothing is completed. The success message
    /// reports the count seen before the call.
    pub async fn clear_completed(&self) {
        let completed = self.state.with_untracked(|s| s.stats().completed);
        if completed == 0 {
            self.feedback.info(Message::NothingToClear);
            return;
        }

        match self.gateway.clear_completed().await {
            Ok(()) => {
                tracing::info!(count = completed, "cleared completed todos");
                self.state.update(|s| s.todos.retain(|t| !t.completed));
                self.feedback.success(Message::ClearSucceeded(completed));
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to clear completed todos");
                self.feedback.error(Message::ClearFailed(e.to_string()));
            }
        }
    }

    pub fn set_filter(&self, filter: FilterType) {
        self.state.update(|s| s.filter = filter);
    }
}
