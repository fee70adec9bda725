//! # Catalog Handle
//!
//! Opening the product store and handing out repositories.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Startup                                    │
//! │                                                                         │
//! │  API Server Startup                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogConfig::new(path) ← Configure storage                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog::open(config).await ← create file if missing, verify parse    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │  Catalog                                │                           │
//! │  │   store:      Arc<dyn ProductStore>     │                           │
//! │  │   write_lock: Arc<Mutex<()>>            │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ catalog.products() per request                                 │
//! │       ▼                                                                 │
//! │  Request 1 ──► ProductRepository ─┐                                    │
//! │  Request 2 ──► ProductRepository ─┼── same store, same writer lock     │
//! │  Request 3 ──► ProductRepository ─┘                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::DbResult;
use crate::repository::product::ProductRepository;
use crate::store::{JsonFileStore, MemoryStore, ProductStore};

// =============================================================================
// Configuration
// =============================================================================

/// Where the catalog keeps its products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    /// A JSON file on disk.
    File(PathBuf),
    /// Process memory; lost on exit.
    Memory,
}

/// Catalog configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = CatalogConfig::new("./data/products.json")
///     .create_if_missing(true);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Where products are stored.
    pub location: StorageLocation,

    /// Write an empty array when the file does not exist yet.
    /// Default: true
    pub create_if_missing: bool,
}

impl CatalogConfig {
    /// Creates a configuration for the JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CatalogConfig {
            location: StorageLocation::File(path.into()),
            create_if_missing: true,
        }
    }

    /// Sets whether a missing file is created on open.
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Creates an in-memory configuration (for testing).
    pub fn in_memory() -> Self {
        CatalogConfig {
            location: StorageLocation::Memory,
            create_if_missing: false,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Main catalog handle providing repository access.
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn ProductStore>,
    write_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("store", &self.store.location())
            .finish()
    }
}

impl Catalog {
    /// Opens the catalog described by `config`.
    ///
    /// ## What This Does
    /// 1. Builds the store for the configured location
    /// 2. Writes `[]` if the file is missing and `create_if_missing` is set
    /// 3. Reads the collection once so a malformed file fails at startup
    ///
    /// ## Returns
    /// * `Ok(Catalog)` - Ready-to-use catalog
    /// * `Err(DbError)` - The file cannot be inspected, read or parsed
    pub async fn open(config: CatalogConfig) -> DbResult<Self> {
        let store: Arc<dyn ProductStore> = match &config.location {
            StorageLocation::File(path) => {
                info!(path = %path.display(), "Opening products file");
                let store = JsonFileStore::new(path);
                if !store.exists().await? {
                    if config.create_if_missing {
                        store.write_all(&[]).await?;
                        info!(path = %path.display(), "Created empty products file");
                    } else {
                        warn!(path = %path.display(), "Products file does not exist");
                    }
                }
                Arc::new(store)
            }
            StorageLocation::Memory => Arc::new(MemoryStore::new()),
        };

        let catalog = Catalog::with_store(store);
        let count = catalog.products().count().await?;
        info!(count, store = %catalog.store.location(), "Catalog opened");

        Ok(catalog)
    }

    /// Wraps an existing store.
    pub fn with_store(store: Arc<dyn ProductStore>) -> Self {
        Catalog {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let products = catalog.products().list_or_search(Some("coca")).await?;
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.store.clone(), self.write_lock.clone())
    }

    /// Returns where the catalog stores its products.
    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Checks if the store is readable.
    ///
    /// ## Returns
    /// * `true` - Store parses
    /// * `false` - Store is unreadable or malformed
    pub async fn health_check(&self) -> bool {
        self.store.read_all().await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
