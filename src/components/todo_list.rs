//! Todo List Component
//!
//! Renders the filtered todos in insertion order, plus loading/empty states.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::i18n::{label, Label};
use crate::models::Todo;
use crate::store::{use_feedback, use_todo_store};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();
    let feedback = use_feedback();
    let locale = Signal::derive(move || feedback.locale());

    let loading_store = store.clone();
    let empty_store = store.clone();
    let is_empty = move || !empty_store.is_loading() && empty_store.filtered_todos().is_empty();

    view! {
        <Show when=move || loading_store.is_loading()>
            <p class="todo-loading">{move || label(Label::Loading, locale.get())}</p>
        </Show>
        <Show when=is_empty>
            <p class="todo-empty">{move || label(Label::Empty, locale.get())}</p>
        </Show>
        <ul class="todo-list">
            // Keyed on completion too so a toggled row re-renders
            <For
                each=move || store.filtered_todos()
                key=|todo| (todo.id, todo.completed)
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}

/// Single row: checkbox, text, delete button
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_todo_store();
    let feedback = use_feedback();
    let locale = Signal::derive(move || feedback.locale());
    let id = todo.id;

    let toggle_store = store.clone();
    let on_toggle = move |_| {
        let store = toggle_store.clone();
        spawn_local(async move { store.toggle(id).await });
    };

    let on_delete = move |_| {
        let store = store.clone();
        spawn_local(async move { store.delete(id).await });
    };

    view! {
        <li class=if todo.completed { "todo-item completed" } else { "todo-item" }>
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=todo.completed
                on:change=on_toggle
            />
            <span class="todo-text">{todo.text}</span>
            <button class="delete-btn" on:click=on_delete>
                {move || label(Label::Delete, locale.get())}
            </button>
        </li>
    }
}
