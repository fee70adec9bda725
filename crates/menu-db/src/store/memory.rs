//! In-memory product store for tests and throwaway catalogs.

use async_trait::async_trait;
use menu_core::Product;
use tokio::sync::RwLock;

use super::ProductStore;
use crate::error::DbResult;

/// Product store holding the collection in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Creates a store pre-filled with `products`.
    pub fn with_products(products: Vec<Product>) -> Self {
        MemoryStore {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn read_all(&self) -> DbResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn write_all(&self, products: &[Product]) -> DbResult<()> {
        *self.products.write().await = products.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
