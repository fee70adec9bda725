//! # Client Error Types
//!
//! The `Display` text of every variant is safe to show to the user.
//!
//! ```text
//! tokio::time::timeout elapsed   → ClientError::Timeout
//! reqwest send / body failure    → ClientError::Network
//! non-2xx or success: false      → ClientError::Http { message from server or "HTTP error N" }
//! 2xx body not an envelope       → ClientError::Decode
//! ```

use thiserror::Error;

/// API client errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The server did not answer within the configured timeout.
    #[error("The server took too long to respond. Check your connection and try again.")]
    Timeout { after_ms: u64 },

    /// The server answered with an error.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The request never got an answer.
    #[error("Could not reach the server: {0}")]
    Network(String),

    /// The server answered 2xx with a body that is not a product envelope.
    #[error("Unexpected response from the server: {0}")]
    Decode(String),

    /// Client configuration is invalid.
    #[error("Invalid value for {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Builds an Http error, falling back to `HTTP error <status>`
    /// when the server sent no message.
    pub fn http(status: u16, message: Option<String>) -> Self {
        ClientError::Http {
            status,
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("HTTP error {}", status)),
        }
    }

    /// Returns true for timeouts.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Timeout { .. })
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
