//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache headers, the placeholder weather report values, and default
//! paths. `AppConfig` is the root configuration struct containing all settings.

use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Health endpoint - probes must always revalidate
pub const CACHE_CONTROL_HEALTH: &str = "no-cache";

/// Weather endpoint - every response carries a fresh timestamp
pub const CACHE_CONTROL_WEATHER: &str = "no-store";

// =============================================================================
// Weather Report Placeholders
// =============================================================================
// The report is fabricated: aside from the requested city and the timestamp,
// every field is a fixed placeholder.

/// Temperature reported for every city, in degrees Celsius
pub const PLACEHOLDER_TEMPERATURE_C: f64 = 27.3;

/// Sky condition label
pub const PLACEHOLDER_CONDITION: &str = "Cloudy";

/// Relative humidity percentage
pub const PLACEHOLDER_HUMIDITY: u8 = 70;

/// Report timestamp format: ISO-8601 with microseconds, UTC, no offset suffix
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "stratus=debug,tower_http=debug";

/// Human-readable log format
pub const LOG_FORMAT_TEXT: &str = "text";

/// Structured log format
pub const LOG_FORMAT_JSON: &str = "json";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LOG_FORMAT_TEXT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        LOG_FORMAT_TEXT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        // Validate: the log format must be one of the supported values
        if config.logging.format != LOG_FORMAT_TEXT && config.logging.format != LOG_FORMAT_JSON {
            return Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}'. Expected \"{}\" or \"{}\"",
                config.logging.format, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            )));
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
