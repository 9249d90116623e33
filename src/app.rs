//! Todo Frontend App
//!
//! Builds the gateway and stores once, provides them to the views and
//! kicks off the initial load.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bridge::TauriBridge;
use crate::components::{FilterBar, SettingsPanel, ToastHost, TodoFooter, TodoInput, TodoList};
use crate::gateway::{Gateway, GatewayConfig};
use crate::i18n::{label, Label, Locale};
use crate::store::{startup, Feedback, SettingsConfig, SettingsStore, TodoStore};
use crate::toast::{ToastConfig, Toaster};
use crate::wait::{BrowserTimer, Timer};

#[component]
pub fn App() -> impl IntoView {
    let timer: Arc<dyn Timer> = Arc::new(BrowserTimer);

    let toaster = Toaster::new(timer.clone(), ToastConfig::default());
    let feedback = Feedback::new(Arc::new(toaster.clone()), Locale::default());

    let gateway = Gateway::new(Arc::new(TauriBridge), timer.clone(), GatewayConfig::default());

    let todos = TodoStore::new(gateway.clone(), feedback.clone());
    let settings = SettingsStore::new(gateway, feedback.clone(), timer, SettingsConfig::default());

    // Provide context to all children
    provide_context(toaster);
    provide_context(feedback.clone());
    provide_context(todos.clone());
    provide_context(settings.clone());

    let startup_settings = settings.clone();
    spawn_local(async move { startup(&todos, &startup_settings).await });

    let locale = Signal::derive(move || feedback.locale());
    let open_settings = move |_| {
        let settings = settings.clone();
        spawn_local(async move { settings.open().await });
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>{move || label(Label::Title, locale.get())}</h1>
                <button class="settings-btn" on:click=open_settings>
                    {move || label(Label::Settings, locale.get())}
                </button>
            </header>

            <main class="main-content">
                <TodoInput />
                <FilterBar />
                <TodoList />
                <TodoFooter />
            </main>

            <SettingsPanel />
            <ToastHost />
        </div>
    }
}
