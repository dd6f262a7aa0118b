//! Widget Configuration
//!
//! Read once at startup from the optional global `window.TODO_WIDGET_CONFIG`
//! object. Every field has a default, so a missing object means defaults.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Name of the global JS object holding overrides
const CONFIG_GLOBAL: &str = "TODO_WIDGET_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Heading text
    pub title: String,
    /// Local-storage slot holding the list
    pub storage_key: String,
    /// Save the list to local storage after each change
    pub persist: bool,
    /// Click on the text to edit in place
    pub inline_edit: bool,
    /// Ask before removing an item
    pub confirm_delete: bool,
    /// Max log level (off, error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Todo App".to_string(),
            storage_key: "todos".to_string(),
            persist: true,
            inline_edit: true,
            confirm_delete: false,
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse from JSON text, for embedding and tests
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    fn from_js(value: JsValue) -> Result<Self, String> {
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }

    /// Load overrides from the page, falling back to defaults.
    /// Returns the config plus a parse error to report once logging is up.
    pub fn load() -> (Self, Option<String>) {
        let Some(window) = web_sys::window() else {
            return (Self::default(), None);
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if value.is_undefined() || value.is_null() {
            return (Self::default(), None);
        }
        match Self::from_js(value) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Unknown level names fall back to `info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        assert_eq!(WidgetConfig::from_json("{}").unwrap(), WidgetConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = WidgetConfig::from_json(r#"{"persist": false, "storage_key": "work"}"#).unwrap();
        assert!(!config.persist);
        assert_eq!(config.storage_key, "work");
        assert!(config.inline_edit);
        assert_eq!(config.title, "Todo App");
    }

    #[test]
    fn test_wrong_type_is_error() {
        assert!(WidgetConfig::from_json(r#"{"persist": "yes"}"#).is_err());
    }

    #[test]
    fn test_level_filter() {
        let mut config = WidgetConfig::default();
        assert_eq!(config.level_filter(), LevelFilter::Info);
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
