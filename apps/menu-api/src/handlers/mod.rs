//! HTTP handlers.
//!
//! Handlers are thin: parse the request, call [`menu_db::ProductRepository`],
//! wrap the result in an [`menu_core::Envelope`]. Status codes come from
//! [`crate::error::ApiError`].

pub mod health;
pub mod products;

use crate::error::ApiError;

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::route_not_found()
}

/// Fallback for a matched route with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
