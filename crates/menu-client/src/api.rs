//! # API Wrapper
//!
//! Read-only access to the catalog API.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fetch_products(Some("coca"))                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET {base_url}/products?search=coca                                   │
//! │       │                                                                 │
//! │       ├── no answer within timeout ──────────► ClientError::Timeout    │
//! │       ├── connection refused / reset ────────► ClientError::Network    │
//! │       ├── non-2xx or success: false ─────────► ClientError::Http       │
//! │       │                                        (server message or       │
//! │       │                                         "HTTP error N")         │
//! │       └── 2xx + success: true ───────────────► Ok(data)                │
//! │                                                                         │
//! │  Every failure is logged before it is returned.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use async_trait::async_trait;
use menu_core::{Envelope, Product};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

// =============================================================================
// Source Trait
// =============================================================================

/// The two reads the search state needs.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Lists products, filtered by `search_term` when given.
    async fn fetch_products(&self, search_term: Option<&str>) -> ClientResult<Vec<Product>>;

    /// Fetches one product.
    async fn fetch_product_by_id(&self, id: u64) -> ClientResult<Product>;
}

// =============================================================================
// HTTP Client
// =============================================================================

/// HTTP client for the catalog API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Creates a client for `config`.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(ApiClient {
            http,
            base_url: config.base_url,
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `path` and unwraps the envelope's `data`, bounded by the timeout.
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, ?query, "GET");

        let result = match tokio::time::timeout(self.timeout, self.send(&url, query)).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Timeout {
                after_ms: self.timeout.as_millis() as u64,
            }),
        };

        if let Err(e) = &result {
            error!(url = %url, error = ?e, "Request failed");
        }

        result
    }

    async fn send<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> ClientResult<T> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let envelope = serde_json::from_slice::<Envelope<T>>(&body);

        if !status.is_success() {
            let message = envelope.ok().and_then(|e| e.message);
            return Err(ClientError::http(status.as_u16(), message));
        }

        let envelope = envelope.map_err(|e| ClientError::Decode(e.to_string()))?;
        if !envelope.success {
            return Err(ClientError::http(status.as_u16(), envelope.message));
        }

        envelope
            .data
            .ok_or_else(|| ClientError::Decode("response has no data".to_string()))
    }
}

#[async_trait]
impl ProductSource for ApiClient {
    async fn fetch_products(&self, search_term: Option<&str>) -> ClientResult<Vec<Product>> {
        match search_term.map(str::trim).filter(|t| !t.is_empty()) {
            Some(term) => self.get("/products", &[("search", term)]).await,
            None => self.get("/products", &[]).await,
        }
    }

    async fn fetch_product_by_id(&self, id: u64) -> ClientResult<Product> {
        self.get(&format!("/products/{}", id), &[]).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
