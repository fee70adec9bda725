//! # Database Error Types
//!
//! Error types for catalog operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error      CoreError (menu-core)         │
//! │       │                                        │                        │
//! │       ▼                                        ▼                        │
//! │  DbError::Io / Malformed / Serialize    DbError::NotFound /            │
//! │  (storage failures)                     UniqueViolation / Validation   │
//! │       │                                        │                        │
//! │       └──────────────────┬─────────────────────┘                        │
//! │                          ▼                                              │
//! │  ApiError (in menu-api) ← status code + envelope                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use menu_core::{CoreError, ValidationError};
use thiserror::Error;

/// Catalog operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Uniqueness violation.
    ///
    /// ## When This Occurs
    /// - Creating a product whose normalized SKU is taken
    /// - Changing a product's SKU to one used by another product
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Input failed validation; one entry per violated rule.
    #[error("Invalid input: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Validation(Vec<ValidationError>),

    /// The products file could not be read or written.
    ///
    /// ## When This Occurs
    /// - File permissions issue
    /// - Disk full
    /// - Parent directory cannot be created
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// The products file is not a JSON array of products.
    #[error("Malformed products file {path}: {message}")]
    Malformed { path: String, message: String },

    /// The collection could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialize(String),

    /// The stored collection already holds the largest representable id.
    #[error("No id left after {max}")]
    IdsExhausted { max: u64 },
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates a UniqueViolation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        DbError::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Wraps an I/O failure on `path`.
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        DbError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// Wraps a parse failure of the file at `path`.
    pub fn malformed(path: &Path, err: serde_json::Error) -> Self {
        DbError::Malformed {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// Returns true for failures of the underlying storage
    /// (as opposed to rejected input or missing records).
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            DbError::Io { .. }
                | DbError::Malformed { .. }
                | DbError::Serialize(_)
                | DbError::IdsExhausted { .. }
        )
    }
}

/// Convert domain errors to DbError.
///
/// ## Error Mapping
/// ```text
/// CoreError::ProductNotFound  → DbError::NotFound
/// CoreError::DuplicateSku     → DbError::UniqueViolation
/// CoreError::InvalidPayload   → DbError::Validation (all entries)
/// CoreError::Validation       → DbError::Validation (single entry)
/// ```
impl From<CoreError> for DbError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => DbError::not_found("Product", id),
            CoreError::DuplicateSku { sku } => DbError::duplicate("sku", sku),
            CoreError::InvalidPayload(errors) => DbError::Validation(errors),
            CoreError::Validation(e) => DbError::Validation(vec![e]),
        }
    }
}

impl From<ValidationError> for DbError {
    fn from(err: ValidationError) -> Self {
        DbError::Validation(vec![err])
    }
}

/// Result type for catalog operations.
pub type DbResult<T> = Result<T, DbError>;
