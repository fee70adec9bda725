//! Menu API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::path::PathBuf;

/// Menu API configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// Products file
    pub data_file: PathBuf,

    /// Allow any origin (the mobile app runs on a different origin in dev)
    pub cors_permissive: bool,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = ApiConfig {
            host: lookup("MENU_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("MENU_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MENU_PORT".to_string()))?,

            data_file: lookup("MENU_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data/products.json")),

            cors_permissive: lookup("MENU_CORS_PERMISSIVE")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MENU_CORS_PERMISSIVE".to_string()))?,
        };

        if config.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue("MENU_HOST".to_string()));
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
