//! Pack Checklist Frontend Entry Point

mod app;
mod catalog;
mod codec;
mod components;
mod config;
mod context;
mod engine;
mod models;
mod navigation;
mod schedule;
mod store;
mod url_state;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_query(&navigation::current_search());
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
