//! Skate Results Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod markdown;
mod pages;
mod pwa;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use skate_core::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::compiled().unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("invalid build configuration, using defaults: {e}").into());
        AppConfig::default()
    });
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&e.to_string().into());
    }
    tracing::info!("starting against {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
