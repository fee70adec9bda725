//! # menu-client: Catalog API Client
//!
//! The read side of the mobile menu: fetch products, search them, keep
//! screen state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Digital Menu Architecture                           │
//! │                                                                         │
//! │  ┌───────────────────────────────────────────────────────────────────┐  │
//! │  │               ★ menu-client (THIS CRATE) ★                        │  │
//! │  │                                                                   │  │
//! │  │   ┌────────────────────┐        ┌─────────────────────────────┐  │  │
//! │  │   │  ProductBrowser    │ uses   │  ProductSource (trait)      │  │  │
//! │  │   │  items / loading / │──────► │    └── ApiClient (reqwest)  │  │  │
//! │  │   │  error / term      │        │        timeout, envelopes   │  │  │
//! │  │   └────────────────────┘        └──────────────┬──────────────┘  │  │
//! │  └──────────────────────────────────────────────────┼────────────────┘  │
//! │                                                     │ HTTP              │
//! │  ┌──────────────────────────────────────────────────▼───────────────┐  │
//! │  │                    menu-api (axum)                                │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] - `ApiClient` and the `ProductSource` trait
//! - [`browser`] - Search state with id-first lookup
//! - [`config`] - Base URL and timeout
//! - [`error`] - Client error types
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use menu_client::{ApiClient, ClientConfig, ProductBrowser};
//!
//! let client = ApiClient::new(ClientConfig::from_env()?)?;
//! let browser = ProductBrowser::open(Arc::new(client)).await;
//! browser.search("coca").await;
//! println!("{:?}", browser.snapshot().await.items);
//! ```

pub mod api;
pub mod browser;
pub mod config;
pub mod error;

pub use api::{ApiClient, ProductSource};
pub use browser::{BrowserState, ProductBrowser};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
