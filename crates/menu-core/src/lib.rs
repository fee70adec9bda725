//! # menu-core: Pure Business Logic for the Digital Menu
//!
//! This crate contains the catalog's business rules as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Digital Menu Architecture                           │
//! │                                                                         │
//! │  ┌──────────────────────┐            ┌──────────────────────────────┐  │
//! │  │  Mobile app /        │   HTTP     │  menu-api (axum)             │  │
//! │  │  menu-client         │──────────► │  GET/POST/PUT/DELETE         │  │
//! │  └──────────────────────┘            └──────────────┬───────────────┘  │
//! │                                                     │                   │
//! │  ┌──────────────────────────────────────────────────▼───────────────┐  │
//! │  │               ★ menu-core (THIS CRATE) ★                          │  │
//! │  │                                                                   │  │
//! │  │   ┌───────────┐   ┌──────────────┐   ┌───────────────────────┐   │  │
//! │  │   │   types   │   │  validation  │   │        search         │   │  │
//! │  │   │  Product  │   │  payloads    │   │  SearchFilter         │   │  │
//! │  │   │  Patch    │   │  ids, skus   │   │  id / name matching   │   │  │
//! │  │   └───────────┘   └──────────────┘   └───────────────────────┘   │  │
//! │  │                                                                   │  │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS                │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! │                                                     │                   │
//! │  ┌──────────────────────────────────────────────────▼───────────────┐  │
//! │  │                    menu-db (Storage Layer)                        │  │
//! │  │           products.json, ProductRepository                        │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, payloads, patches)
//! - [`envelope`] - `{success, data | message}` response wrapper
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`search`] - `?search=` term interpretation
//!
//! ## Example Usage
//!
//! ```rust
//! use menu_core::{validation, SearchFilter};
//!
//! assert_eq!(validation::normalize_sku(" COKE-350 "), "coke-350");
//! assert_eq!(SearchFilter::parse(Some("12")), SearchFilter::Id(Some(12)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod envelope;
pub mod error;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use envelope::Envelope;
pub use error::{CoreError, CoreResult, ValidationError};
pub use search::{is_numeric_term, SearchFilter};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum SKU length, in characters.
pub const MAX_SKU_LEN: usize = 50;

/// Maximum product name length, in characters.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum search term length, in characters.
pub const MAX_SEARCH_LEN: usize = 100;
