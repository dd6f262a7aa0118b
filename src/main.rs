//! Todo Widget Entry Point

mod config;
mod logging;
mod storage;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = WidgetConfig::load();
    logging::init(config.level_filter());
    if let Some(e) = config_error {
        log::warn!("[APP] ignoring malformed TODO_WIDGET_CONFIG: {}", e);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
