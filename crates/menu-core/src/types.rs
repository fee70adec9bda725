//! # Domain Types
//!
//! Core domain types used throughout the digital menu.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   NewProduct    │   │  ProductPatch   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  name           │   │  name?          │       │
//! │  │  name           │   │  price          │   │  price?         │       │
//! │  │  price          │   │  sku            │   │  sku?           │       │
//! │  │  sku (normal.)  │   │  description    │   │  description?   │       │
//! │  │  description    │   └────────▲────────┘   └────────▲────────┘       │
//! │  └─────────────────┘            │ validate             │ validate      │
//! │                        ┌────────┴─────────────────────┴────────┐       │
//! │                        │            ProductPayload              │       │
//! │                        │   raw JSON object, any field any type  │       │
//! │                        └────────────────────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! - `id`: positive integer assigned by the server, immutable
//! - `sku`: business identifier, unique after trim + lowercase

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

// =============================================================================
// Product
// =============================================================================

/// A menu item as stored in the products file and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Server-assigned identifier (max existing id + 1).
    #[ts(type = "number")]
    pub id: u64,

    /// Display name shown on the menu.
    pub name: String,

    /// Price as a plain decimal number.
    pub price: f64,

    /// Normalized SKU (trimmed, lowercase).
    pub sku: String,

    /// Free text; empty when none was given.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Builds the stored record for a validated create payload.
    ///
    /// The SKU is stored in its normalized form.
    pub fn from_new(id: u64, new: NewProduct) -> Self {
        Product {
            id,
            name: new.name,
            price: new.price,
            sku: crate::validation::normalize_sku(&new.sku),
            description: new.description,
        }
    }

    /// Applies the fields present in `patch`; absent fields keep their values.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(sku) = patch.sku {
            self.sku = crate::validation::normalize_sku(&sku);
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }

    /// Returns the SKU in the form used for uniqueness comparison.
    ///
    /// Records written by hand may not be normalized, so this re-normalizes.
    pub fn normalized_sku(&self) -> String {
        crate::validation::normalize_sku(&self.sku)
    }
}

// =============================================================================
// Payloads
// =============================================================================

/// Raw create/update body.
///
/// Every field is kept as an untyped JSON value so validation can report
/// all wrong fields at once instead of failing on the first bad type.
/// Unknown fields (including `id`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
}

/// A validated create payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    /// SKU as submitted (trimmed); normalized when stored.
    pub sku: String,
    pub description: String,
}

/// A validated partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub sku: Option<String>,
    pub description: Option<String>,
}

impl ProductPatch {
    /// Returns true if the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.sku.is_none() && self.description.is_none()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
