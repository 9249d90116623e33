//! Application State Stores
//!
//! Explicitly constructed stores shared with the views through context.
//! Each store calls the gateway first and only touches its own state once the
//! backend has answered; every failure ends up as a toast.

mod settings;
mod todos;

use std::sync::Arc;

use leptos::prelude::*;

use crate::i18n::{Locale, Message};
use crate::models::ToastKind;
use crate::toast::Notify;

pub use settings::{SettingsConfig, SettingsStore};
pub use todos::TodoStore;

/// Localised notifications shared by both stores
#[derive(Clone)]
pub struct Feedback {
    notifier: Arc<dyn Notify>,
    locale: ArcRwSignal<Locale>,
}

impl Feedback {
    pub fn new(notifier: Arc<dyn Notify>, locale: Locale) -> Self {
        Self {
            notifier,
            locale: ArcRwSignal::new(locale),
        }
    }

    /// Tracked read for the views
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn set_locale(&self, locale: Locale) {
        if self.locale.get_untracked() != locale {
            self.locale.set(locale);
        }
    }

    pub fn success(&self, message: Message) {
        self.emit(message, ToastKind::Success);
    }

    pub fn error(&self, message: Message) {
        self.emit(message, ToastKind::Error);
    }

    pub fn info(&self, message: Message) {
        self.emit(message, ToastKind::Info);
    }

    fn emit(&self, message: Message, kind: ToastKind) {
        let text = message.render(self.locale.get_untracked());
        self.notifier.show(text, kind);
    }
}

/// Initial fetch on mount. The configured language is read first so the
/// load notification uses it; the list shows its loading state meanwhile.
/// Both calls share the gateway, so a missing bridge is waited for once.
pub async fn startup(todos: &TodoStore, settings: &SettingsStore) {
    todos.begin_loading();
    settings.sync_locale().await;
    todos.load().await;
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Get the settings store from context
pub fn use_settings_store() -> SettingsStore {
    expect_context::<SettingsStore>()
}

/// Get the shared feedback channel from context
pub fn use_feedback() -> Feedback {
    expect_context::<Feedback>()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::gateway::testing::{gateway_over, FakeBridge};
    use crate::models::{AppConfig, Todo};
    use crate::toast::testing::RecordingNotifier;
    use crate::wait::testing::InstantTimer;

    struct Harness {
        todos: TodoStore,
        settings: SettingsStore,
        notes: Arc<RecordingNotifier>,
        feedback: Feedback,
    }

    fn harness(bridge: Arc<FakeBridge>) -> (Harness, Arc<InstantTimer>) {
        let notes = Arc::new(RecordingNotifier::default());
        let feedback = Feedback::new(notes.clone(), Locale::Zh);
        let (gateway, timer) = gateway_over(bridge);
        let todos = TodoStore::new(gateway.clone(), feedback.clone());
        let settings = SettingsStore::new(gateway, feedback.clone(), timer.clone(), SettingsConfig::default());
        (Harness { todos, settings, notes, feedback }, timer)
    }

    #[tokio::test]
    async fn test_startup_without_bridge_waits_once() {
        let (h, timer) = harness(Arc::new(FakeBridge::never_ready()));

        startup(&h.todos, &h.settings).await;
        assert!(timer.total_slept() <= Duration::from_millis(5000));
        assert!(!h.todos.snapshot().loading);
        assert_eq!(
            h.notes.shown(),
            vec![(
                "加载失败: backend bridge unavailable after 5000ms".to_string(),
                ToastKind::Error
            )]
        );
    }

    #[tokio::test]
    async fn test_startup_loads_in_configured_language() {
        let bridge = Arc::new(FakeBridge::with_todos(vec![Todo {
            id: 1,
            text: "a".to_string(),
            completed: false,
        }]));
        bridge.set_config(AppConfig { language: "en".to_string(), ..AppConfig::default() });
        let (h, _) = harness(bridge.clone());

        startup(&h.todos, &h.settings).await;
        assert_eq!(bridge.calls(), vec!["get_config".to_string(), "load_todos".to_string()]);
        assert_eq!(h.feedback.locale(), Locale::En);
        assert_eq!(h.todos.snapshot().todos.len(), 1);
        assert_eq!(h.notes.shown(), vec![("Todos loaded".to_string(), ToastKind::Success)]);
    }
}
