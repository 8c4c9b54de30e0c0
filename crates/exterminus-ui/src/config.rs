//! Configuration loading and validation
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Page config: a `<script type="application/json" id="exterminus-ui-config">`
//!    element rendered by the server
//!
//! Every field is optional in the page config; missing fields keep their
//! defaults.
//!
//! # Example Config
//!
//! ```json
//! {
//!   "log_level": "debug",
//!   "password": { "show_label": "Afficher", "hide_label": "Masquer" },
//!   "date_range": { "start_id": "leave_start", "end_id": "leave_end" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use web_sys::Document;

use crate::error::{Result, UiError};

/// Id of the script element holding page-level overrides
pub const CONFIG_ELEMENT_ID: &str = "exterminus-ui-config";

// ═══════════════════════════════════════════════════════════════════════════
// CONFIGURATION STRUCTURES
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// `trace`, `debug`, `info`, `warn`, `error` or `off`
    pub log_level: String,
    pub password: PasswordToggleConfig,
    pub date_range: DateRangeConfig,
}

/// Selectors, labels and glyphs for the password peek button
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PasswordToggleConfig {
    pub toggle_selector: String,
    /// Attribute on the button naming the bound input's id
    pub target_attribute: String,
    /// Selector for the icon element inside the button
    pub icon_selector: String,
    pub show_label: String,
    pub hide_label: String,
    pub show_icon: String,
    pub hide_icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DateRangeConfig {
    pub start_id: String,
    pub end_id: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// DEFAULT IMPLEMENTATIONS
// ═══════════════════════════════════════════════════════════════════════════

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            password: PasswordToggleConfig::default(),
            date_range: DateRangeConfig::default(),
        }
    }
}

impl Default for PasswordToggleConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".password-toggle".to_string(),
            target_attribute: "data-target".to_string(),
            icon_selector: "[aria-hidden=\"true\"]".to_string(),
            show_label: "Show password".to_string(),
            hide_label: "Hide password".to_string(),
            show_icon: "👁️".to_string(),
            hide_icon: "🙈".to_string(),
        }
    }
}

impl Default for DateRangeConfig {
    fn default() -> Self {
        Self {
            start_id: "start_date".to_string(),
            end_id: "end_date".to_string(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PARSING AND VALIDATION
// ═══════════════════════════════════════════════════════════════════════════

impl UiConfig {
    /// Parses a JSON override document on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The JSON is malformed or has wrongly typed fields
    /// - The resulting config fails [`UiConfig::validate`]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| UiError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every selector, id and attribute name is usable
    ///
    /// # Errors
    ///
    /// Returns `UiError::InvalidConfig` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        self.level()?;

        let required = [
            ("password.toggle_selector", &self.password.toggle_selector),
            ("password.target_attribute", &self.password.target_attribute),
            ("password.icon_selector", &self.password.icon_selector),
            ("date_range.start_id", &self.date_range.start_id),
            ("date_range.end_id", &self.date_range.end_id),
        ];

        required
            .iter()
            .find(|(_, value)| value.trim().is_empty())
            .map_or(Ok(()), |(field, _)| {
                Err(UiError::InvalidConfig(format!("{field} must not be empty")))
            })
    }

    /// Parsed `log_level`
    ///
    /// # Errors
    ///
    /// Returns `UiError::InvalidConfig` for an unknown level name
    pub fn level(&self) -> Result<LevelFilter> {
        parse_level(&self.log_level)
    }
}

/// Parses a level name case-insensitively
///
/// # Errors
///
/// Returns `UiError::InvalidConfig` if the name is not one of
/// `trace`, `debug`, `info`, `warn`, `error`, `off`
pub fn parse_level(name: &str) -> Result<LevelFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        "off" => Ok(LevelFilter::OFF),
        other => Err(UiError::InvalidConfig(format!(
            "unknown log_level '{other}'"
        ))),
    }
}

/// Loads the page-level configuration
///
/// Returns the defaults when the page carries no config element.
///
/// # Errors
///
/// Returns error if the config element exists but its content is not a
/// valid `UiConfig` (see [`UiConfig::from_json`])
pub fn load(document: &Document) -> Result<UiConfig> {
    let embedded = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    match embedded {
        Some(json) if !json.trim().is_empty() => UiConfig::from_json(&json),
        _ => Ok(UiConfig::default()),
    }
}
