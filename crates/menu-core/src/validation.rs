//! # Validation Module
//!
//! Input validation utilities for the digital menu.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum)                                        │
//! │  └── Body must be a JSON object                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Field types (string / number)                                     │
//! │  ├── Required fields, lengths, positive ids                            │
//! │  └── Collects every violation into CoreError::InvalidPayload           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ProductRepository (menu-db)                                  │
//! │  └── SKU uniqueness against the stored collection                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde_json::Value;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{NewProduct, ProductPatch, ProductPayload};
use crate::{MAX_NAME_LEN, MAX_SEARCH_LEN, MAX_SKU_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 50 characters
///
/// ## Example
/// ```rust
/// use menu_core::validation::validate_sku;
///
/// assert!(validate_sku("COKE-330").is_ok());
/// assert!(validate_sku("   ").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.chars().count() > MAX_SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LEN,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (lists everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "search".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

/// Trims and lowercases a SKU for uniqueness comparison and storage.
///
/// ## Example
/// ```rust
/// use menu_core::validation::normalize_sku;
///
/// assert_eq!(normalize_sku("  Coke-330 "), "coke-330");
/// ```
pub fn normalize_sku(sku: &str) -> String {
    sku.trim().to_lowercase()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative; zero is allowed (free items)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::WrongType {
            field: "price".to_string(),
            expected: "number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a product id already parsed as an integer.
pub fn validate_product_id(id: u64) -> ValidationResult<u64> {
    if id == 0 {
        return Err(ValidationError::MustBePositive {
            field: "id".to_string(),
        });
    }

    Ok(id)
}

/// Parses a product id from a path segment.
///
/// ## Rules
/// - Base-10 digits only (no sign, no decimal point)
/// - Must be greater than zero
///
/// ## Example
/// ```rust
/// use menu_core::validation::parse_product_id;
///
/// assert_eq!(parse_product_id("7").unwrap(), 7);
/// assert!(parse_product_id("0").is_err());
/// assert!(parse_product_id("1.5").is_err());
/// assert!(parse_product_id("abc").is_err());
/// ```
pub fn parse_product_id(raw: &str) -> ValidationResult<u64> {
    let raw = raw.trim();

    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::MustBePositive {
            field: "id".to_string(),
        });
    }

    let id = raw.parse::<u64>().map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "out of range".to_string(),
    })?;

    validate_product_id(id)
}

// =============================================================================
// Payload Validators
// =============================================================================

/// Validates a create payload.
///
/// ## Rules
/// - `name`: required non-empty string
/// - `price`: required JSON number, non-negative
/// - `sku`: required non-empty string
/// - `description`: optional string, defaults to empty
///
/// All violations are collected into one [`CoreError::InvalidPayload`].
pub fn validate_new_product(payload: &ProductPayload) -> CoreResult<NewProduct> {
    let mut errors = Vec::new();

    let name = required(string_field(&payload.name, "name"), "name", &mut errors)
        .and_then(|name| keep_valid(name, |n| validate_product_name(n), &mut errors));
    let price = required(number_field(&payload.price, "price"), "price", &mut errors)
        .and_then(|price| keep_valid(price, |p| validate_price(*p), &mut errors));
    let sku = required(string_field(&payload.sku, "sku"), "sku", &mut errors)
        .and_then(|sku| keep_valid(sku, |s| validate_sku(s), &mut errors));
    let description = collect(string_field(&payload.description, "description"), &mut errors);

    match (name, price, sku) {
        (Some(name), Some(price), Some(sku)) if errors.is_empty() => Ok(NewProduct {
            name,
            price,
            sku: sku.trim().to_string(),
            description: description.flatten().unwrap_or_default(),
        }),
        _ => Err(CoreError::InvalidPayload(errors)),
    }
}

/// Validates an update payload. Only fields that are present are checked.
pub fn validate_product_patch(payload: &ProductPayload) -> CoreResult<ProductPatch> {
    let mut errors = Vec::new();

    let name = collect(string_field(&payload.name, "name"), &mut errors)
        .flatten()
        .and_then(|name| keep_valid(name, |n| validate_product_name(n), &mut errors));
    let price = collect(number_field(&payload.price, "price"), &mut errors)
        .flatten()
        .and_then(|price| keep_valid(price, |p| validate_price(*p), &mut errors));
    let sku = collect(string_field(&payload.sku, "sku"), &mut errors)
        .flatten()
        .and_then(|sku| keep_valid(sku, |s| validate_sku(s), &mut errors));
    let description = collect(string_field(&payload.description, "description"), &mut errors).flatten();

    if !errors.is_empty() {
        return Err(CoreError::InvalidPayload(errors));
    }

    Ok(ProductPatch {
        name,
        price,
        sku: sku.map(|s| s.trim().to_string()),
        description,
    })
}

/// Extracts an optional string field, rejecting other JSON types.
fn string_field(value: &Option<Value>, field: &str) -> ValidationResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::WrongType {
            field: field.to_string(),
            expected: "string".to_string(),
        }),
    }
}

/// Extracts an optional numeric field, rejecting other JSON types.
fn number_field(value: &Option<Value>, field: &str) -> ValidationResult<Option<f64>> {
    match value {
        None => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or_else(|| ValidationError::WrongType {
            field: field.to_string(),
            expected: "number".to_string(),
        }),
        Some(_) => Err(ValidationError::WrongType {
            field: field.to_string(),
            expected: "number".to_string(),
        }),
    }
}

fn collect<T>(result: ValidationResult<T>, errors: &mut Vec<ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

fn required<T>(
    result: ValidationResult<Option<T>>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<T> {
    match collect(result, errors) {
        Some(Some(value)) => Some(value),
        Some(None) => {
            errors.push(ValidationError::Required {
                field: field.to_string(),
            });
            None
        }
        None => None,
    }
}

fn keep_valid<T, F>(value: T, check: F, errors: &mut Vec<ValidationError>) -> Option<T>
where
    F: FnOnce(&T) -> ValidationResult<()>,
{
    collect(check(&value), errors).map(|_| value)
}

// =============================================================================
// Unit Tests
// =============================================================================
