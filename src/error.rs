/// Error types for the background worker

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised by calls into the host extension APIs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtensionError {
    /// `chrome.tabs` lookup or query failed.
    #[error("tabs API failed: {0}")]
    Tabs(String),

    /// `chrome.storage.sync` read or write failed.
    #[error("storage API failed: {0}")]
    Storage(String),

    /// `chrome.scripting.executeScript` failed (tab gone, no permission...).
    #[error("script injection failed: {0}")]
    Scripting(String),

    /// `chrome.action.setIcon` failed.
    #[error("setting icon failed: {0}")]
    Icon(String),

    /// A value could not cross the JS boundary.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The tab URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<serde_wasm_bindgen::Error> for ExtensionError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        ExtensionError::Serialization(e.to_string())
    }
}

/// Render a rejected JS promise value for logging.
pub fn describe_js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

impl From<serde_json::Error> for ExtensionError {
    fn from(e: serde_json::Error) -> Self {
        ExtensionError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExtensionError>;
