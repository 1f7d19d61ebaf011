//! Bookshelf Frontend Entry Point

mod app;
mod components;
mod context;
mod logging;
mod store;

use app::App;
use bookshelf_core::Config;
use leptos::prelude::*;

const CONFIG_JSON: &str = include_str!("../bookshelf.json");

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_json(CONFIG_JSON).unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[config] {}; using defaults", e).into());
        Config::default()
    });
    logging::init(config.level_filter());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
