use serde::Deserialize;
use std::time::Duration;

use crate::error::ConfigError;

/// Id of the optional `<script type="application/json">` element a host page
/// can use to override defaults.
pub const CONFIG_ELEMENT_ID: &str = "date-display-config";

pub const DEFAULT_ENDPOINT: &str = "/date";
pub const DEFAULT_LOGO_SRC: &str = "logo.svg";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Path of the date endpoint, resolved against the page's own origin
    pub endpoint: String,
    /// No timeout unless the page asks for one
    pub timeout_ms: Option<u64>,
    pub logo_src: String,
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: None,
            logo_src: DEFAULT_LOGO_SRC.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Unknown level names fall back to `info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Read overrides embedded in the host page, or defaults when there are none.
pub fn load() -> Result<ApiConfig, ConfigError> {
    match embedded_config() {
        Some(raw) if !raw.trim().is_empty() => ApiConfig::from_json(&raw),
        _ => Ok(ApiConfig::default()),
    }
}

fn embedded_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}
