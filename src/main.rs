//! Todo Frontend Entry Point

mod app;
mod bridge;
mod components;
mod gateway;
mod i18n;
mod models;
mod store;
mod toast;
mod wait;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    tracing::info!("starting todo frontend");
    mount_to_body(App);
}
