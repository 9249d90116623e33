//! Filter Bar Component

use leptos::prelude::*;

use crate::i18n::filter_label;
use crate::models::FilterType;
use crate::store::{use_feedback, use_todo_store};

/// One button per filter; the current one is highlighted
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_todo_store();
    let feedback = use_feedback();
    let locale = Signal::derive(move || feedback.locale());

    view! {
        <div class="filters">
            {FilterType::ALL.into_iter().map(|filter| {
                let class_store = store.clone();
                let click_store = store.clone();
                let btn_class = move || {
                    if class_store.filter() == filter { "filter-btn active" } else { "filter-btn" }
                };
                view! {
                    <button
                        class=btn_class
                        data-filter=filter.as_str()
                        on:click=move |_| click_store.set_filter(filter)
                    >
                        {move || filter_label(filter, locale.get())}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
