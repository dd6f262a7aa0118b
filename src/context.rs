//! Application Context
//!
//! Shared settings provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::WidgetConfig;

/// Per-widget behavior switches read by the row components
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppContext {
    /// Click on the text to edit in place
    pub inline_edit: bool,
    /// Ask before removing
    pub confirm_delete: bool,
}

impl AppContext {
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            inline_edit: config.inline_edit,
            confirm_delete: config.confirm_delete,
        }
    }
}

/// Get the app context, defaults when not provided
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(|| AppContext::from_config(&WidgetConfig::default()))
}
