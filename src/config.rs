//! # Configuration
//!
//! Application configuration loading and management.
//!
//! Configuration is loaded in the following order (later sources override
//! earlier):
//! 1. Default values
//! 2. TOML configuration file (if present)
//! 3. Environment variables (prefixed with `SETTLEMENT_`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SETTLEMENT_CONFIG_FILE` | Path to the TOML config file | `config.toml` |
//! | `SETTLEMENT_NETWORK` | Network to account for | `mainnet` |
//! | `SETTLEMENT_ORDERBOOK_URL` | Orderbook base URL override | network default |
//! | `SETTLEMENT_ANALYTICS_API_KEY` | Analytics engine credential | unset |
//! | `SETTLEMENT_LOG_LEVEL` | Log level | `info` |
//! | `SETTLEMENT_LOG_FORMAT` | Log format (json/pretty) | `json` |

use crate::domain::value_objects::Network;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

/// Orderbook client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderbookConfig {
    /// Network whose orderbook to talk to.
    #[serde(default = "default_network")]
    pub network: Network,

    /// Explicit base URL override; the network default applies when unset.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds.
    #[serde(default = "default_orderbook_timeout")]
    pub timeout_ms: u64,
}

impl Default for OrderbookConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            base_url: None,
            timeout_ms: default_orderbook_timeout(),
        }
    }
}

/// Analytics engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Credential for the analytics engine; resolved from the environment.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Query timeout in milliseconds.
    #[serde(default = "default_analytics_timeout")]
    pub timeout_ms: u64,

    /// Location of the hosted trusted token list.
    #[serde(default = "default_token_list_url")]
    pub token_list_url: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            timeout_ms: default_analytics_timeout(),
            token_list_url: default_token_list_url(),
        }
    }
}

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (structured logging).
    #[default]
    Json,
    /// Pretty format (human-readable).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Json,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Orderbook client configuration.
    #[serde(default)]
    pub orderbook: OrderbookConfig,

    /// Analytics engine configuration.
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Service name for tracing.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            orderbook: OrderbookConfig::default(),
            analytics: AnalyticsConfig::default(),
            log: LogConfig::default(),
            service_name: default_service_name(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a local `.env`, the optional config file,
    /// and environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config_path = std::env::var("SETTLEMENT_CONFIG_FILE")
            .unwrap_or_else(|_| "config.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        if let Ok(network) = std::env::var("SETTLEMENT_NETWORK")
            && let Ok(parsed) = network.parse()
        {
            self.orderbook.network = parsed;
        }
        if let Ok(url) = std::env::var("SETTLEMENT_ORDERBOOK_URL") {
            self.orderbook.base_url = Some(url);
        }
        if let Ok(key) = std::env::var("SETTLEMENT_ANALYTICS_API_KEY") {
            self.analytics.api_key = Some(key);
        }
        if let Ok(level) = std::env::var("SETTLEMENT_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Ok(format) = std::env::var("SETTLEMENT_LOG_FORMAT") {
            self.log.format = match format.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                _ => LogFormat::Json,
            };
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is outside its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "log.level".to_string(),
                message: format!(
                    "invalid log level '{}', must be one of: {:?}",
                    self.log.level, valid_levels
                ),
            });
        }

        if self.orderbook.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "orderbook.timeout_ms".to_string(),
                message: "timeout must be positive".to_string(),
            });
        }
        if self.analytics.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analytics.timeout_ms".to_string(),
                message: "timeout must be positive".to_string(),
            });
        }

        Ok(())
    }
}

fn default_network() -> Network {
    Network::Mainnet
}

fn default_orderbook_timeout() -> u64 {
    5000
}

fn default_analytics_timeout() -> u64 {
    30_000
}

fn default_token_list_url() -> String {
    crate::infrastructure::token_list::HOSTED_TRUSTED_TOKEN_LIST_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_service_name() -> String {
    "settlement-accounting".to_string()
}
