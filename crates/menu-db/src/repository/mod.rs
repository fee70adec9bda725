//! # Repository Module
//!
//! Catalog repository implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  catalog.products().list_or_search(Some("coca"))               │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list_or_search(&self, query)                                      │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── create(&self, payload)                                            │
//! │  ├── update(&self, id, payload)                                        │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  read_all / write_all                                          │
//! │       ▼                                                                 │
//! │  ProductStore (products.json or memory)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and search

pub mod product;
