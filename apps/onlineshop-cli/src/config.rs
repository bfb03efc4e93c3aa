//! Front-end configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | variable                   | values          | default                |
//! |----------------------------|-----------------|------------------------|
//! | `ONLINESHOP_OUTPUT`        | `text` / `json` | `text`                 |
//! | `ONLINESHOP_LOG`           | tracing filter  | `warn,onlineshop=info` |
//! | `ONLINESHOP_STOP_ON_ERROR` | `true` / `false`| `false`                |
//!
//! `RUST_LOG`, when set, takes precedence over `ONLINESHOP_LOG`.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_LOG_FILTER: &str = "warn,onlineshop=info";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable message (or summary) per command.
    #[default]
    Text,
    /// One JSON object per command.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "ONLINESHOP_OUTPUT".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Front-end configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Output format for command results
    pub output: OutputFormat,

    /// tracing filter used when RUST_LOG is unset
    pub log_filter: String,

    /// Stop reading input after the first failed command
    pub stop_on_error: bool,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            output: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            stop_on_error: false,
        }
    }
}

impl ShopConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ShopConfig::default();

        let output = match lookup("ONLINESHOP_OUTPUT") {
            Some(value) => value.parse::<OutputFormat>()?,
            None => defaults.output,
        };

        let log_filter = lookup("ONLINESHOP_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let stop_on_error = match lookup("ONLINESHOP_STOP_ON_ERROR") {
            Some(value) => value
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "ONLINESHOP_STOP_ON_ERROR".to_string(),
                    value,
                })?,
            None => defaults.stop_on_error,
        };

        Ok(ShopConfig {
            output,
            log_filter,
            stop_on_error,
        })
    }
}

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}
