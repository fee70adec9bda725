//! # Product Stores
//!
//! Whole-collection persistence behind one trait.
//!
//! ## Store Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ProductStore                                         │
//! │                                                                         │
//! │  read_all()  ──► parse the ENTIRE collection, every call (no cache)    │
//! │  write_all() ──► replace the ENTIRE collection, every call             │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │   JsonFileStore      │          │    MemoryStore       │            │
//! │  │   products.json      │          │    RwLock<Vec<_>>    │            │
//! │  │   (production)       │          │    (tests)           │            │
//! │  └──────────────────────┘          └──────────────────────┘            │
//! │                                                                         │
//! │  Stores do not lock across calls. ProductRepository owns the           │
//! │  read-modify-write critical section.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod json_file;
pub mod memory;

use async_trait::async_trait;
use menu_core::Product;

use crate::error::DbResult;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Loads and saves the full product collection.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Reads every product, in stored order.
    async fn read_all(&self) -> DbResult<Vec<Product>>;

    /// Replaces the stored collection with `products`.
    async fn write_all(&self, products: &[Product]) -> DbResult<()>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}
