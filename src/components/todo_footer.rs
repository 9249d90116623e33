//! Todo Footer Component
//!
//! Remaining count and the clear-completed action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::i18n::{items_left, label, Label};
use crate::store::{use_feedback, use_todo_store};

#[component]
pub fn TodoFooter() -> impl IntoView {
    let store = use_todo_store();
    let feedback = use_feedback();
    let locale = Signal::derive(move || feedback.locale());

    let stats_store = store.clone();
    let count_text = move || items_left(stats_store.stats().active, locale.get());

    let on_clear = move |_| {
        let store = store.clone();
        spawn_local(async move { store.clear_completed().await });
    };

    view! {
        <footer class="todo-footer">
            <span class="todo-count">{count_text}</span>
            <button class="clear-completed" on:click=on_clear>
                {move || label(Label::ClearCompleted, locale.get())}
            </button>
        </footer>
    }
}
