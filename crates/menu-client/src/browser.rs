//! # Product Browser
//!
//! Search state behind the menu screen.
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  search("12")                                                          │
//! │       │  search_term = "12"                                            │
//! │       ▼                                                                 │
//! │  load("12")   seq = 5, loading = true, error = None                    │
//! │       │                                                                 │
//! │       ├── all digits? ── fetch_product_by_id(12)                       │
//! │       │                     ├── Ok(p)  ──► items = [p]                 │
//! │       │                     └── Err    ──► fetch_products("12")        │
//! │       │                                                                 │
//! │       └── otherwise ──────── fetch_products(term or None)              │
//! │                                                                         │
//! │  On completion:                                                        │
//! │    seq still 5?  yes ──► items / error updated, loading = false        │
//! │                  no  ──► result dropped (a newer load owns the state)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed load keeps the previous items and sets `error`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use menu_core::{is_numeric_term, Product};
use tokio::sync::RwLock;
use tracing::debug;

use crate::api::ProductSource;
use crate::error::ClientResult;

/// Snapshot of what the screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_term: String,
}

impl Default for BrowserState {
    fn default() -> Self {
        BrowserState {
            items: Vec::new(),
            loading: true,
            error: None,
            search_term: String::new(),
        }
    }
}

/// Search state driven by a [`ProductSource`].
pub struct ProductBrowser {
    source: Arc<dyn ProductSource>,
    state: RwLock<BrowserState>,
    sequence: AtomicU64,
}

impl std::fmt::Debug for ProductBrowser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductBrowser")
            .field("sequence", &self.sequence.load(Ordering::SeqCst))
            .finish()
    }
}

impl ProductBrowser {
    /// Creates a browser in its initial state (`loading = true`, nothing loaded).
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        ProductBrowser {
            source,
            state: RwLock::new(BrowserState::default()),
            sequence: AtomicU64::new(0),
        }
    }

    /// Creates a browser and performs the initial full listing.
    pub async fn open(source: Arc<dyn ProductSource>) -> Self {
        let browser = ProductBrowser::new(source);
        browser.load("").await;
        browser
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> BrowserState {
        self.state.read().await.clone()
    }

    /// Sets the search term and loads it.
    pub async fn search(&self, term: &str) {
        self.state.write().await.search_term = term.to_string();
        self.load(term).await;
    }

    /// Loads again with the current search term.
    pub async fn reload(&self) {
        let term = self.state.read().await.search_term.clone();
        self.load(&term).await;
    }

    /// Loads `term` and updates the state, unless a newer load started meanwhile.
    pub async fn load(&self, term: &str) {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = self.fetch(term).await;

        let mut state = self.state.write().await;
        if self.sequence.load(Ordering::SeqCst) != seq {
            debug!(seq, term, "Discarding stale load");
            return;
        }

        match result {
            Ok(items) => {
                debug!(seq, count = items.len(), "Load finished");
                state.items = items;
            }
            Err(e) => state.error = Some(e.to_string()),
        }
        state.loading = false;
    }

    async fn fetch(&self, term: &str) -> ClientResult<Vec<Product>> {
        let term = term.trim();

        if is_numeric_term(term) {
            if let Ok(id) = term.parse::<u64>() {
                match self.source.fetch_product_by_id(id).await {
                    Ok(product) => return Ok(vec![product]),
                    Err(e) => debug!(id, error = %e, "Id lookup failed, searching instead"),
                }
            }
        }

        let query = (!term.is_empty()).then_some(term);
        self.source.fetch_products(query).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::error::ClientError;

    fn product(id: u64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: 5.0,
            sku: format!("sku-{}", id),
            description: String::new(),
        }
    }

    /// In-memory source that records calls; terms in `delays` answer late.
    #[derive(Default)]
    struct FakeSource {
        products: Vec<Product>,
        fail: Mutex<Option<ClientError>>,
        delays: HashMap<String, Duration>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn with(products: Vec<Product>) -> Self {
            FakeSource {
                products,
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProductSource for FakeSource {
        async fn fetch_products(&self, search_term: Option<&str>) -> ClientResult<Vec<Product>> {
            let term = search_term.unwrap_or("").to_string();
            self.calls.lock().unwrap().push(format!("list:{}", term));

            if let Some(delay) = self.delays.get(&term) {
                tokio::time::sleep(*delay).await;
            }
            if let Some(e) = self.fail.lock().unwrap().clone() {
                return Err(e);
            }

            let needle = term.to_lowercase();
            Ok(self
                .products
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }

        async fn fetch_product_by_id(&self, id: u64) -> ClientResult<Product> {
            self.calls.lock().unwrap().push(format!("id:{}", id));

            self.products
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| ClientError::http(404, Some("Product not found.".to_string())))
        }
    }

    fn menu() -> Vec<Product> {
        vec![
            product(1, "Coca-Cola Lata"),
            product(2, "Pão de Queijo"),
            product(12, "Suco"),
            product(30, "Combo 12 Salgados"),
        ]
    }

    #[tokio::test]
    async fn test_initial_state() {
        let browser = ProductBrowser::new(Arc::new(FakeSource::with(menu())));
        let state = browser.snapshot().await;

        assert!(state.loading);
        assert!(state.items.is_empty());
        assert_eq!(state.error, None);
        assert_eq!(state.search_term, "");
    }

    #[tokio::test]
    async fn test_open_lists_everything() {
        let source = Arc::new(FakeSource::with(menu()));
        let browser = ProductBrowser::open(source.clone()).await;
        let state = browser.snapshot().await;

        assert!(!state.loading);
        assert_eq!(state.items.len(), 4);
        assert_eq!(source.calls(), vec!["list:"]);
    }

    #[tokio::test]
    async fn test_numeric_term_uses_id_first() {
        let source = Arc::new(FakeSource::with(menu()));
        let browser = ProductBrowser::new(source.clone());

        browser.search(" 12 ").await;
        let state = browser.snapshot().await;

        assert_eq!(state.items, vec![product(12, "Suco")]);
        assert_eq!(state.search_term, " 12 ");
        assert_eq!(source.calls(), vec!["id:12"]);
    }

    #[tokio::test]
    async fn test_numeric_term_falls_back_to_search() {
        let source = Arc::new(FakeSource::with(menu()));
        let browser = ProductBrowser::new(source.clone());

        browser.search("99").await;
        assert!(browser.snapshot().await.items.is_empty());
        assert_eq!(source.calls(), vec!["id:99", "list:99"]);
    }

    #[tokio::test]
    async fn test_name_search() {
        let source = Arc::new(FakeSource::with(menu()));
        let browser = ProductBrowser::new(source.clone());

        browser.search("queijo").await;
        let state = browser.snapshot().await;

        assert_eq!(state.items, vec![product(2, "Pão de Queijo")]);
        assert_eq!(source.calls(), vec!["list:queijo"]);
    }

    #[tokio::test]
    async fn test_error_keeps_previous_items() {
        let source = Arc::new(FakeSource::with(menu()));
        let browser = ProductBrowser::open(source.clone()).await;

        *source.fail.lock().unwrap() = Some(ClientError::Timeout { after_ms: 8000 });
        browser.search("coca").await;

        let state = browser.snapshot().await;
        assert_eq!(state.items.len(), 4);
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("The server took too long to respond. Check your connection and try again.")
        );

        // next successful load clears the error
        *source.fail.lock().unwrap() = None;
        browser.reload().await;

        let state = browser.snapshot().await;
        assert_eq!(state.error, None);
        assert_eq!(state.items, vec![product(1, "Coca-Cola Lata")]);
        assert_eq!(source.calls(), vec!["list:", "list:coca", "list:coca"]);
    }

    #[tokio::test]
    async fn test_stale_load_is_discarded() {
        let mut source = FakeSource::with(menu());
        source
            .delays
            .insert("coca".to_string(), Duration::from_millis(200));
        let browser = ProductBrowser::new(Arc::new(source));

        // "coca" starts first but resolves after "queijo"
        tokio::join!(browser.search("coca"), async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            browser.search("queijo").await;
        });

        let state = browser.snapshot().await;
        assert_eq!(state.items, vec![product(2, "Pão de Queijo")]);
        assert_eq!(state.search_term, "queijo");
        assert!(!state.loading);
    }
}
