//! Toast Host Component
//!
//! Fixed container rendering every live toast.

use leptos::prelude::*;

use crate::toast::Toaster;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    view! {
        <div class="toast-container">
            <For
                each=move || toaster.toasts()
                key=|toast| (toast.id, toast.leaving)
                children=|toast| {
                    let class = toast.class();
                    view! { <div class=class>{toast.message}</div> }
                }
            />
        </div>
    }
}
