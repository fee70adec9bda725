//! Error types for Menu API.
//!
//! Every failure leaves the server as an [`Envelope`] with `success: false`.
//!
//! ## Status Mapping
//! ```text
//! DbError::Validation       → 400 "Invalid payload." + errors[]
//! DbError::NotFound         → 404 "Product not found."
//! DbError::UniqueViolation  → 409 "SKU already registered."
//! DbError::Io / Malformed   → 500 generic message (details logged)
//! DbError::IdsExhausted     → 500
//! unmatched route / method → 404 / 405
//! JsonRejection             → 400 "Malformed JSON body."
//! ```

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use menu_core::Envelope;
use menu_db::DbError;

/// An HTTP error response.
#[derive(Debug, thiserror::Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Vec<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Attaches per-field messages.
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    /// The path segment is not a positive integer.
    pub fn invalid_id() -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, "Invalid ID. Use a positive integer.")
    }

    /// No route matched.
    pub fn route_not_found() -> Self {
        ApiError::new(StatusCode::NOT_FOUND, "Route not found.")
    }

    /// The route exists but not for this method.
    pub fn method_not_allowed() -> Self {
        ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.")
    }

    /// The catalog store cannot be read.
    pub fn unavailable() -> Self {
        ApiError::new(StatusCode::SERVICE_UNAVAILABLE, "Catalog unavailable.")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Envelope::<()>::failure(self.message, self.errors);
        (self.status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Validation(errors) => ApiError::new(StatusCode::BAD_REQUEST, "Invalid payload.")
                .with_errors(errors.iter().map(|e| e.to_string()).collect()),
            DbError::NotFound { .. } => ApiError::new(StatusCode::NOT_FOUND, "Product not found."),
            DbError::UniqueViolation { .. } => {
                ApiError::new(StatusCode::CONFLICT, "SKU already registered.")
            }
            storage => {
                tracing::error!(error = %storage, "Catalog storage failure");
                ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error while accessing the catalog.",
                )
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, "Malformed JSON body.")
            .with_errors(vec![rejection.body_text()])
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, "Invalid query string.")
            .with_errors(vec![rejection.body_text()])
    }
}

/// Handler result alias.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::ValidationError;

    #[test]
    fn test_db_error_status() {
        let cases = [
            (DbError::not_found("Product", 9), StatusCode::NOT_FOUND),
            (DbError::duplicate("sku", "coke"), StatusCode::CONFLICT),
            (
                DbError::Validation(vec![ValidationError::Required {
                    field: "name".to_string(),
                }]),
                StatusCode::BAD_REQUEST,
            ),
            (
                DbError::Io {
                    path: "/data/products.json".to_string(),
                    message: "permission denied".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                DbError::IdsExhausted { max: u64::MAX },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn test_storage_details_are_hidden() {
        let err = ApiError::from(DbError::Malformed {
            path: "/data/products.json".to_string(),
            message: "expected value at line 1".to_string(),
        });

        assert!(!err.message.contains("products.json"));
        assert!(err.errors.is_empty());
    }

    #[test]
    fn test_validation_lists_every_field() {
        let err = ApiError::from(DbError::Validation(vec![
            ValidationError::Required {
                field: "name".to_string(),
            },
            ValidationError::Required {
                field: "sku".to_string(),
            },
        ]));

        assert_eq!(err.message, "Invalid payload.");
        assert_eq!(err.errors.len(), 2);
    }
}
