//! # Response Envelope
//!
//! Every API response body is wrapped the same way:
//!
//! ```text
//! success:  { "success": true,  "data": ..., "message"?: "Product created." }
//! failure:  { "success": false, "message": "Invalid payload.", "errors"?: [...] }
//! ```
//!
//! The server builds envelopes; the client decodes them.

use serde::{Deserialize, Serialize};

/// The `{success, data | message | errors}` wrapper.
///
/// Missing `data` / `message` decode as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl<T> Envelope<T> {
    /// Successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Envelope {
            success: true,
            data: Some(data),
            message: None,
            errors: Vec::new(),
        }
    }

    /// Successful response carrying `data` and a confirmation message.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Envelope {
            message: Some(message.into()),
            ..Envelope::ok(data)
        }
    }

    /// Failed response.
    pub fn failure(message: impl Into<String>, errors: Vec<String>) -> Self {
        Envelope {
            success: false,
            data: None,
            message: Some(message.into()),
            errors,
        }
    }
}
