//! Todo Input Component
//!
//! Text field for new todos; Enter or the button submits.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::i18n::{label, Label};
use crate::store::{use_feedback, use_todo_store};

#[component]
pub fn TodoInput() -> impl IntoView {
    let store = use_todo_store();
    let feedback = use_feedback();
    let locale = Signal::derive(move || feedback.locale());

    let (text, set_text) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = text.get_untracked();
        let store = store.clone();
        spawn_local(async move {
            if store.add(&value).await {
                set_text.set(String::new());
            }
        });
    };

    view! {
        <form class="todo-input" on:submit=on_submit>
            <input
                type="text"
                placeholder=move || label(Label::InputPlaceholder, locale.get())
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">
                {move || label(Label::Add, locale.get())}
            </button>
        </form>
    }
}
