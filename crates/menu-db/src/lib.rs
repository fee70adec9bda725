//! # menu-db: Storage Layer for the Digital Menu
//!
//! This crate provides catalog access for the menu API.
//! Products live in a single JSON file that is read whole on every
//! operation and rewritten whole on every mutation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Digital Menu Data Flow                           │
//! │                                                                         │
//! │  HTTP handler (GET /products?search=coca)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     menu-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Catalog     │    │  Repositories │    │   Stores     │  │   │
//! │  │   │ (catalog.rs)  │    │ (product.rs)  │    │  (store/)    │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ CatalogConfig │───►│ ProductRepo   │───►│ JsonFile     │  │   │
//! │  │   │ writer lock   │    │ search, CRUD  │    │ Memory       │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   ./data/products.json                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Catalog handle and configuration
//! - [`store`] - `ProductStore` trait, JSON file and in-memory stores
//! - [`error`] - Catalog error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use menu_db::{Catalog, CatalogConfig};
//!
//! let catalog = Catalog::open(CatalogConfig::new("./data/products.json")).await?;
//!
//! let drinks = catalog.products().list_or_search(Some("coca")).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{Catalog, CatalogConfig, StorageLocation};
pub use error::{DbError, DbResult};
pub use store::{JsonFileStore, MemoryStore, ProductStore};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
