//! Error types for the form enhancements
//!
//! Missing elements are never errors here: setup skips them silently.
//! These variants cover the cases where the host environment itself is
//! unusable or configuration is malformed.

use wasm_bindgen::JsValue;

/// Errors that can occur while booting or mounting enhancements
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// No `window` global (not running in a browser)
    #[error("window is not available")]
    WindowNotAvailable,

    /// Window exists but has no document
    #[error("document is not available")]
    DocumentNotAvailable,

    /// `querySelector`/`querySelectorAll` rejected a selector
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A DOM call threw
    #[error("DOM operation failed: {0}")]
    DomOperation(String),

    /// Configuration parsed but failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Embedded configuration was not valid JSON for `UiConfig`
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),
}

impl UiError {
    /// Wraps a thrown JS value from a DOM call
    #[must_use]
    pub fn dom(operation: &str, err: &JsValue) -> Self {
        Self::DomOperation(format!("{operation}: {err:?}"))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
