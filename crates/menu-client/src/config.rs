//! Client configuration.
//!
//! Loaded from environment variables with fallback to defaults:
//! - `MENU_API_URL` - API base URL (default: http://localhost:3000)
//! - `MENU_API_TIMEOUT_MS` - Per-request timeout (default: 8000)

use std::env;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(8000);

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// API client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,

    /// Upper bound for each request, including reading the body.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let base_url = lookup("MENU_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(ClientError::InvalidConfig("MENU_API_URL".to_string()));
        }

        let timeout = match lookup("MENU_API_TIMEOUT_MS") {
            Some(ms) => ms
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .ok_or_else(|| ClientError::InvalidConfig("MENU_API_TIMEOUT_MS".to_string()))?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(ClientConfig::new(base_url.trim()).timeout(timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout, Duration::from_millis(8000));
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(|key| match key {
            "MENU_API_URL" => Some("http://192.168.0.10:3000/".to_string()),
            "MENU_API_TIMEOUT_MS" => Some("2500".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.base_url, "http://192.168.0.10:3000");
        assert_eq!(config.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_invalid_timeout() {
        for raw in ["soon", "0", "-5"] {
            let result = ClientConfig::from_lookup(|key| {
                (key == "MENU_API_TIMEOUT_MS").then(|| raw.to_string())
            });
            assert_eq!(
                result,
                Err(ClientError::InvalidConfig("MENU_API_TIMEOUT_MS".to_string()))
            );
        }
    }
}
