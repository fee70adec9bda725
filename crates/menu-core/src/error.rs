//! # Error Types
//!
//! Domain-specific error types for menu-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  menu-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule failures (404 / 409 / 400)       │
//! │  └── ValidationError  - One violated input rule                        │
//! │                                                                         │
//! │  menu-db errors (separate crate)                                       │
//! │  └── DbError          - Not found, duplicate SKU, file failures        │
//! │                                                                         │
//! │  menu-api errors (in app)                                              │
//! │  └── ApiError         - What HTTP clients see (envelope)               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → ApiError → Client       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id.
    #[error("Product not found: {0}")]
    ProductNotFound(u64),

    /// Another product already uses this SKU (trimmed, case-insensitive).
    ///
    /// ## When This Occurs
    /// ```text
    /// existing: { id: 3, sku: "coke-330" }
    ///
    /// POST /products { sku: "  COKE-330 " }
    ///      │
    ///      ▼
    /// normalize → "coke-330" ── matches id 3 ──► DuplicateSku
    /// ```
    #[error("A product with SKU '{sku}' already exists")]
    DuplicateSku { sku: String },

    /// One or more payload fields failed validation.
    ///
    /// Every violated field is reported, not just the first one.
    #[error("Invalid payload: {}", join_messages(.0))]
    InvalidPayload(Vec<ValidationError>),

    /// Validation error (wraps a single ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns the individual validation messages carried by this error.
    ///
    /// Empty for errors that are not validation failures.
    pub fn validation_messages(&self) -> Vec<String> {
        match self {
            CoreError::InvalidPayload(errors) => errors.iter().map(|e| e.to_string()).collect(),
            CoreError::Validation(e) => vec![e.to_string()],
            _ => Vec::new(),
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be a positive integer")]
    MustBePositive { field: String },

    /// Numeric value is below the allowed minimum.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Field has the wrong JSON type.
    #[error("{field} must be a {expected}")]
    WrongType { field: String, expected: String },

    /// Invalid format (e.g., id that is not an integer).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
