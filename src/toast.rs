//! Notification Emitter
//!
//! Short-lived toasts stacked in the bottom-right corner. Each one removes
//! itself after the display duration; any number may be visible at once.

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::ToastKind;
use crate::wait::Timer;

/// Anything that can put a message in front of the user
pub trait Notify: Send + Sync {
    fn show(&self, message: String, kind: ToastKind);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastConfig {
    /// How long a toast stays fully visible
    pub display: Duration,
    /// Length of the slide-out animation before removal
    pub exit_animation: Duration,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(3000),
            exit_animation: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    /// Playing the exit animation
    pub leaving: bool,
}

impl Toast {
    pub fn class(&self) -> String {
        if self.leaving {
            format!("{} leaving", self.kind.css_class())
        } else {
            self.kind.css_class().to_string()
        }
    }
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, Default)]
pub struct ToastList {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastList {
    pub fn push(&mut self, message: String, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, message, kind, leaving: false });
        id
    }

    pub fn mark_leaving(&mut self, id: u64) {
        if let Some(toast) = self.items.iter_mut().find(|t| t.id == id) {
            toast.leaving = true;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Reactive toast emitter rendered by `ToastHost`
#[derive(Clone)]
pub struct Toaster {
    toasts: ArcRwSignal<ToastList>,
    timer: Arc<dyn Timer>,
    config: ToastConfig,
}

impl Toaster {
    pub fn new(timer: Arc<dyn Timer>, config: ToastConfig) -> Self {
        Self {
            toasts: ArcRwSignal::new(ToastList::default()),
            timer,
            config,
        }
    }

    /// Tracked snapshot for the view
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.with(|list| list.items().to_vec())
    }

    /// Keep the toast up for the display time, then play the exit
    /// animation and drop it
    async fn dismiss(&self, id: u64) {
        self.timer.sleep(self.config.display).await;
        self.toasts.update(|list| list.mark_leaving(id));
        self.timer.sleep(self.config.exit_animation).await;
        self.toasts.update(|list| list.remove(id));
    }
}

impl Notify for Toaster {
    fn show(&self, message: String, kind: ToastKind) {
        tracing::debug!(?kind, %message, "toast");
        let id = self.toasts.write().push(message, kind);
        let toaster = self.clone();
        spawn_local(async move { toaster.dismiss(id).await });
    }
}
