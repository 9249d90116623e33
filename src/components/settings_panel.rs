//! Settings Panel Component
//!
//! Modal form for the API key, UI language and LLM endpoint/model.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::i18n::{label, Label, Locale};
use crate::models::AppConfig;
use crate::store::{use_feedback, use_settings_store};

/// Shown while the settings store is open
#[component]
pub fn SettingsPanel() -> impl IntoView {
    let store = use_settings_store();

    view! {
        <Show when=move || store.is_open()>
            <SettingsForm />
        </Show>
    }
}

#[component]
fn SettingsForm() -> impl IntoView {
    let store = use_settings_store();
    let feedback = use_feedback();
    let locale = Signal::derive(move || feedback.locale());

    let save_store = store.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let store = save_store.clone();
        spawn_local(async move { store.save().await });
    };

    let cancel_store = store.clone();
    let on_cancel = move |_| cancel_store.close();

    let saving_store = store.clone();
    let saving = Signal::derive(move || saving_store.is_saving());

    view! {
        <div class="settings-overlay">
            <form class="settings-panel" on:submit=on_submit>
                <h2>{move || label(Label::Settings, locale.get())}</h2>

                <OptionalField label_key=Label::ApiKey input_type="password" get=api_key set=set_api_key />
                <LanguageField />
                <OptionalField label_key=Label::LlmBaseUrl input_type="url" get=llm_base_url set=set_llm_base_url />
                <OptionalField label_key=Label::LlmModel input_type="text" get=llm_model set=set_llm_model />

                <div class="settings-actions">
                    <button type="button" class="cancel-btn" on:click=on_cancel>
                        {move || label(Label::Cancel, locale.get())}
                    </button>
                    <button type="submit" class="save-btn" prop:disabled=move || saving.get()>
                        {move || {
                            let key = if saving.get() { Label::Saving } else { Label::Save };
                            label(key, locale.get())
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

fn api_key(config: &AppConfig) -> Option<String> {
    config.api_key.clone()
}

fn set_api_key(config: &mut AppConfig, value: String) {
    config.api_key = Some(value);
}

fn llm_base_url(config: &AppConfig) -> Option<String> {
    config.llm_base_url.clone()
}

fn set_llm_base_url(config: &mut AppConfig, value: String) {
    config.llm_base_url = Some(value);
}

fn llm_model(config: &AppConfig) -> Option<String> {
    config.llm_model.clone()
}

fn set_llm_model(config: &mut AppConfig, value: String) {
    config.llm_model = Some(value);
}

/// Free-text field for an optional config value; blank is saved as null
#[component]
fn OptionalField(
    label_key: Label,
    input_type: &'static str,
    get: fn(&AppConfig) -> Option<String>,
    set: fn(&mut AppConfig, String),
) -> impl IntoView {
    let store = use_settings_store();
    let feedback = use_feedback();
    let locale = Signal::derive(move || feedback.locale());

    let value_store = store.clone();
    let value = move || get(&value_store.form()).unwrap_or_default();

    view! {
        <label class="settings-field">
            <span>{move || label(label_key, locale.get())}</span>
            <input
                type=input_type
                prop:value=value
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    store.edit(|config| set(config, text));
                }
            />
        </label>
    }
}

#[component]
fn LanguageField() -> impl IntoView {
    let store = use_settings_store();
    let feedback = use_feedback();
    let locale = Signal::derive(move || feedback.locale());

    let selected_store = store.clone();
    let selected = Signal::derive(move || Locale::from_code(&selected_store.form().language));

    view! {
        <label class="settings-field">
            <span>{move || label(Label::Language, locale.get())}</span>
            <select on:change=move |ev| {
                let code = event_target_value(&ev);
                store.edit(|config| config.language = code);
            }>
                {Locale::ALL.into_iter().map(|option| view! {
                    <option value=option.code() prop:selected=move || selected.get() == option>
                        {option.display_name()}
                    </option>
                }).collect_view()}
            </select>
        </label>
    }
}
