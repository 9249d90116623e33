//! Settings State Store
//!
//! Holds the settings form while the panel is open. Independent of the todo
//! store: it fetches on open and writes the whole config back on save.

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;

use super::Feedback;
use crate::gateway::Gateway;
use crate::i18n::{Locale, Message};
use crate::models::AppConfig;
use crate::wait::Timer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsConfig {
    /// Pause between the success toast and closing the panel
    pub close_delay: Duration,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            close_delay: Duration::from_millis(1500),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub open: bool,
    pub form: AppConfig,
    pub saving: bool,
    /// Bumped on every open so a delayed close never hits a newer session
    session: u64,
}

#[derive(Clone)]
pub struct SettingsStore {
    gateway: Gateway,
    feedback: Feedback,
    timer: Arc<dyn Timer>,
    config: SettingsConfig,
    state: ArcRwSignal<SettingsState>,
}

impl SettingsStore {
    pub fn new(gateway: Gateway, feedback: Feedback, timer: Arc<dyn Timer>, config: SettingsConfig) -> Self {
        Self {
            gateway,
            feedback,
            timer,
            config,
            state: ArcRwSignal::new(SettingsState::default()),
        }
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> SettingsState {
        self.state.get_untracked()
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.open)
    }

    pub fn is_saving(&self) -> bool {
        self.state.with(|s| s.saving)
    }

    pub fn form(&self) -> AppConfig {
        self.state.with(|s| s.form.clone())
    }

    /// Apply a local edit to the form
    pub fn edit(&self, f: impl FnOnce(&mut AppConfig)) {
        self.state.update(|s| f(&mut s.form));
    }

    pub async fn open(&self) {
        match self.gateway.get_config().await {
            Ok(config) => {
                self.feedback.set_locale(Locale::from_code(&config.language));
                self.state.update(|s| {
                    s.form = config;
                    s.open = true;
                    s.saving = false;
                    s.session += 1;
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load config");
                self.feedback.error(Message::ConfigLoadFailed(e.to_string()));
            }
        }
    }

    /// Pick up the configured UI language at startup without opening the
    /// panel. Failures only get logged; the default language stays.
    pub async fn sync_locale(&self) {
        match self.gateway.get_config().await {
            Ok(config) => self.feedback.set_locale(Locale::from_code(&config.language)),
            Err(e) => tracing::warn!(error = %e, "could not read configured language"),
        }
    }

    /// Unsaved edits are dropped; the next open fetches afresh.
    pub fn close(&self) {
        self.state.update(|s| {
            s.open = false;
            s.saving = false;
        });
    }

    /// Persist the normalized form. The panel closes shortly after success
    /// and stays open with the edits on failure.
    pub async fn save(&self) {
        let (config, session) = self.state.with_untracked(|s| (s.form.normalized(), s.session));
        self.state.update(|s| s.saving = true);

        match self.gateway.save_config(&config).await {
            Ok(()) => {
                tracing::info!(language = %config.language, "saved config");
                self.feedback.set_locale(Locale::from_code(&config.language));
                self.state.update(|s| {
                    s.form = config;
                    s.saving = false;
                });
                self.feedback.success(Message::ConfigSaved);

                self.timer.sleep(self.config.close_delay).await;
                if self.state.with_untracked(|s| s.open && s.session == session) {
                    self.close();
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save config");
                self.state.update(|s| s.saving = false);
                self.feedback.error(Message::ConfigSaveFailed(e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::FakeBridge;
    use crate::gateway::GatewayConfig;
    use crate::models::ToastKind;
    use crate::toast::testing::RecordingNotifier;
    use crate::wait::testing::InstantTimer;

    struct Harness {
        store: SettingsStore,
        bridge: Arc<FakeBridge>,
        notes: Arc<RecordingNotifier>,
        timer: Arc<InstantTimer>,
        feedback: Feedback,
    }

    fn harness() -> Harness {
        let bridge = Arc::new(FakeBridge::default());
        let notes = Arc::new(RecordingNotifier::default());
        let timer = Arc::new(InstantTimer::default());
        let gateway = Gateway::new(bridge.clone(), timer.clone(), GatewayConfig::default());
        let feedback = Feedback::new(notes.clone(), Locale::Zh);
        let store = SettingsStore::new(gateway, feedback.clone(), timer.clone(), SettingsConfig::default());
        Harness { store, bridge, notes, timer, feedback }
    }

    #[tokio::test]
    async fn test_open_copies_backend_config() {
        let h = harness();
        let stored = AppConfig {
            api_key: Some("sk-1".to_string()),
            language: "en".to_string(),
            llm_base_url: Some("http://localhost:11434".to_string()),
            llm_model: Some("llama3".to_string()),
        };
        h.bridge.set_config(stored.clone());

        h.store.open().await;
        let state = h.store.snapshot();
        assert!(state.open);
        assert_eq!(state.form, stored);
        assert_eq!(h.feedback.locale(), Locale::En);
    }

    #[tokio::test]
    async fn test_sync_locale_leaves_panel_closed() {
        let h = harness();
        h.bridge.set_config(AppConfig { language: "en".to_string(), ..AppConfig::default() });

        h.store.sync_locale().await;
        assert_eq!(h.feedback.locale(), Locale::En);
        assert!(!h.store.snapshot().open);

        h.bridge.fail_next("get_config", "gone");
        h.store.sync_locale().await;
        assert_eq!(h.feedback.locale(), Locale::En);
        assert_eq!(h.notes.count(), 0);
    }

    #[tokio::test]
    async fn test_open_failure_stays_closed() {
        let h = harness();
        h.bridge.fail_next("get_config", "permission denied");

        h.store.open().await;
        assert!(!h.store.snapshot().open);
        let (message, kind) = h.notes.last().unwrap();
        assert_eq!(kind, ToastKind::Error);
        assert!(message.contains("permission denied"));
    }

    #[tokio::test]
    async fn test_close_discards_edits() {
        let h = harness();
        h.store.open().await;
        h.store.edit(|form| form.llm_model = Some("unsaved".to_string()));
        h.store.close();
        assert!(!h.store.snapshot().open);

        h.store.open().await;
        assert_eq!(h.store.snapshot().form.llm_model, None);
        assert!(!h.bridge.calls().contains(&"save_app_config".to_string()));
    }

    #[tokio::test]
    async fn test_save_normalizes_blank_fields() {
        let h = harness();
        h.store.open().await;
        h.store.edit(|form| {
            form.api_key = Some("".to_string());
            form.llm_base_url = Some("  https://api.example.com/v1 ".to_string());
            form.llm_model = Some("   ".to_string());
        });

        h.store.save().await;
        let saved = h.bridge.config().unwrap();
        assert_eq!(saved.api_key, None);
        assert_eq!(saved.llm_base_url.as_deref(), Some("https://api.example.com/v1"));
        assert_eq!(saved.llm_model, None);
        assert_eq!(saved.language, "zh");
        assert!(h.bridge.last_args("save_app_config").unwrap()["config"]["apiKey"].is_null());
    }

    #[tokio::test]
    async fn test_save_success_closes_after_delay() {
        let h = harness();
        h.store.open().await;
        h.store.edit(|form| form.language = "en".to_string());

        h.store.save().await;
        assert_eq!(h.timer.total_slept(), Duration::from_millis(1500));
        assert!(!h.store.snapshot().open);
        assert_eq!(h.feedback.locale(), Locale::En);
        assert_eq!(h.notes.last().unwrap(), ("Settings saved".to_string(), ToastKind::Success));
    }

    #[tokio::test]
    async fn test_save_failure_keeps_edits() {
        let h = harness();
        h.store.open().await;
        h.store.edit(|form| form.llm_model = Some("gpt-4o".to_string()));
        h.bridge.fail_next("save_app_config", "disk full");

        h.store.save().await;
        let state = h.store.snapshot();
        assert!(state.open);
        assert!(!state.saving);
        assert_eq!(state.form.llm_model.as_deref(), Some("gpt-4o"));
        assert!(h.notes.last().unwrap().0.contains("disk full"));
        assert_eq!(h.timer.sleep_count(), 0);
    }
}
