//! # Product Repository
//!
//! Catalog operations for products: list/search, get, create, update, delete.
//!
//! ## Read-Modify-Write
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 How a Mutation Runs                                     │
//! │                                                                         │
//! │  POST /products  ──┐                                                   │
//! │  PUT  /products/3 ─┼──► write_lock (one writer at a time)              │
//! │  DELETE /products/5┘          │                                         │
//! │                               ▼                                         │
//! │                      store.read_all()   ← fresh snapshot               │
//! │                               │                                         │
//! │                               ▼                                         │
//! │                      mutate Vec<Product>  (ids, SKU checks)            │
//! │                               │                                         │
//! │                               ▼                                         │
//! │                      store.write_all()  ← whole collection             │
//! │                               │                                         │
//! │                               ▼                                         │
//! │                      release write_lock                                │
//! │                                                                         │
//! │  Reads (list/search/get) skip the lock and re-read the store.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Without the lock, two concurrent creates could read the same snapshot,
//! pick the same id, and the second write would drop the first product.
//! The lock only covers this process; other processes writing the same file
//! are not coordinated.

use std::sync::Arc;

use menu_core::validation::{
    normalize_sku, validate_new_product, validate_product_id, validate_product_patch,
    validate_search_query,
};
use menu_core::{CoreError, NewProduct, Product, ProductPatch, ProductPayload, SearchFilter};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::store::ProductStore;

/// Repository for product operations.
///
/// Cheap to clone; clones share the store and the writer lock.
///
/// ## Usage
/// ```rust,ignore
/// let repo = catalog.products();
///
/// let drinks = repo.list_or_search(Some("coca")).await?;
/// let created = repo.create(&payload).await?;
/// ```
#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn ProductStore>,
    write_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for ProductRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductRepository")
            .field("store", &self.store.location())
            .finish()
    }
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    ///
    /// Repositories that must not race each other have to share `write_lock`.
    pub fn new(store: Arc<dyn ProductStore>, write_lock: Arc<Mutex<()>>) -> Self {
        ProductRepository { store, write_lock }
    }

    /// Lists every product, or those matching `query`.
    ///
    /// ## How It Works
    /// 1. `None` or a blank query returns the whole collection in stored order
    /// 2. An all-digit query returns the product with exactly that id (or nothing)
    /// 3. Any other query returns products whose name contains it, ignoring case
    ///
    /// No matches is an empty list, not an error.
    pub async fn list_or_search(&self, query: Option<&str>) -> DbResult<Vec<Product>> {
        let query = query.map(validate_search_query).transpose()?;
        let filter = SearchFilter::parse(query.as_deref());

        debug!(filter = ?filter, "Listing products");

        let products = filter.apply(self.store.read_all().await?);

        debug!(count = products.len(), "List returned products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Product found
    /// * `Err(DbError::Validation)` - id is zero
    /// * `Err(DbError::NotFound)` - no product with this id
    pub async fn get_by_id(&self, id: u64) -> DbResult<Product> {
        let id = validate_product_id(id)?;

        self.store
            .read_all()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id).into())
    }

    /// Validates a raw payload and creates the product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Created product with its assigned id
    /// * `Err(DbError::Validation)` - every violated field
    /// * `Err(DbError::UniqueViolation)` - SKU already exists
    pub async fn create(&self, payload: &ProductPayload) -> DbResult<Product> {
        let new = validate_new_product(payload)?;
        self.insert(new).await
    }

    /// Inserts an already validated product.
    ///
    /// ## ID Assignment
    /// ```text
    /// existing ids: [1, 2, 7]  ──► new id 8
    /// existing ids: []         ──► new id 1
    /// ```
    /// Ids freed by deletes of the highest id are reused.
    pub async fn insert(&self, new: NewProduct) -> DbResult<Product> {
        let _guard = self.write_lock.lock().await;

        let mut products = self.store.read_all().await?;

        let sku = normalize_sku(&new.sku);
        ensure_sku_available(&products, &sku, None)?;

        let id = next_id(&products)?;
        let product = Product::from_new(id, new);
        products.push(product.clone());

        self.store.write_all(&products).await?;

        info!(id = product.id, sku = %product.sku, "Product created");
        Ok(product)
    }

    /// Validates a partial payload and applies it to product `id`.
    ///
    /// Only the fields present in the payload change.
    pub async fn update(&self, id: u64, payload: &ProductPayload) -> DbResult<Product> {
        let id = validate_product_id(id)?;
        let patch = validate_product_patch(payload)?;
        self.apply_patch(id, patch).await
    }

    /// Applies an already validated patch to product `id`.
    ///
    /// ## Returns
    /// * `Ok(Product)` - the product after the change
    /// * `Err(DbError::NotFound)` - no product with this id
    /// * `Err(DbError::UniqueViolation)` - new SKU belongs to another product
    pub async fn apply_patch(&self, id: u64, patch: ProductPatch) -> DbResult<Product> {
        let id = validate_product_id(id)?;
        let _guard = self.write_lock.lock().await;

        let mut products = self.store.read_all().await?;
        let idx = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;

        if let Some(sku) = &patch.sku {
            ensure_sku_available(&products, &normalize_sku(sku), Some(idx))?;
        }

        debug!(id, fields = ?patch, "Updating product");
        products[idx].apply(patch);
        let updated = products[idx].clone();

        self.store.write_all(&products).await?;

        info!(id, "Product updated");
        Ok(updated)
    }

    /// Removes product `id` and returns the removed record.
    ///
    /// A missing id leaves the collection untouched.
    pub async fn delete(&self, id: u64) -> DbResult<Product> {
        let id = validate_product_id(id)?;
        let _guard = self.write_lock.lock().await;

        let mut products = self.store.read_all().await?;
        let idx = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;

        let removed = products.remove(idx);
        self.store.write_all(&products).await?;

        info!(id, sku = %removed.sku, "Product removed");
        Ok(removed)
    }

    /// Counts stored products (for diagnostics).
    pub async fn count(&self) -> DbResult<usize> {
        Ok(self.store.read_all().await?.len())
    }
}

/// max(existing ids ∪ {0}) + 1
fn next_id(products: &[Product]) -> DbResult<u64> {
    let max = products.iter().map(|p| p.id).max().unwrap_or(0);
    max.checked_add(1).ok_or(DbError::IdsExhausted { max })
}

/// Fails if any product other than `skip` already uses `sku` (normalized).
fn ensure_sku_available(products: &[Product], sku: &str, skip: Option<usize>) -> Result<(), CoreError> {
    let taken = products
        .iter()
        .enumerate()
        .any(|(i, p)| Some(i) != skip && p.normalized_sku() == sku);

    if taken {
        return Err(CoreError::DuplicateSku {
            sku: sku.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
