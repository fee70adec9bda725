//! # Menu API
//!
//! REST server for the digital menu catalog.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Menu API Routes                                 │
//! │                                                                         │
//! │  ┌──────────────────────────────────────┐  ┌──────────────────────────┐│
//! │  │  /products                           │  │  /health                 ││
//! │  │                                      │  │                          ││
//! │  │ • GET    ?search=<term>              │  │ • GET  status + count    ││
//! │  │ • POST                               │  │                          ││
//! │  │ • GET | PUT | DELETE  /{id}          │  │                          ││
//! │  └──────────────────────────────────────┘  └──────────────────────────┘│
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Layers                                       │  │
//! │  │                                                                   │  │
//! │  │  TraceLayer (every request)     CorsLayer (MENU_CORS_PERMISSIVE)  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  menu-db Catalog ──► ProductRepository ──► products.json          │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `MENU_HOST` - Interface to bind (default: 0.0.0.0)
//! - `MENU_PORT` - HTTP port (default: 3000)
//! - `MENU_DATA_FILE` - Products file (default: ./data/products.json)
//! - `MENU_CORS_PERMISSIVE` - Allow any origin (default: true)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod handlers;

use axum::routing::get;
use axum::Router;
use menu_db::Catalog;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        AppState { catalog }
    }
}

/// Builds the application router.
pub fn create_router(state: AppState, cors_permissive: bool) -> Router {
    use handlers::{health, products};

    let router = Router::new()
        .route("/health", get(health::health))
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

// =============================================================================
// Router Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use menu_core::Product;
    use menu_db::{JsonFileStore, MemoryStore};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn product(id: u64, name: &str, sku: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
            sku: sku.to_string(),
            description: String::new(),
        }
    }

    fn app_with(products: Vec<Product>) -> (Router, Catalog) {
        let catalog = Catalog::with_store(Arc::new(MemoryStore::with_products(products)));
        (create_router(AppState::new(catalog.clone()), true), catalog)
    }

    fn seeded() -> (Router, Catalog) {
        app_with(vec![
            product(1, "Coca-Cola Lata 350ml", "coke-lata", 6.0),
            product(2, "COCA-COLA Zero 2L", "coke-zero-2l", 12.0),
            product(7, "Suco 7 Frutas", "suco-7", 9.5),
            product(17, "Pudim", "pudim", 9.0),
        ])
    }

    async fn send_raw(app: &Router, method: &str, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        send_raw(app, method, uri, body.map(|b| b.to_string())).await
    }

    fn ids(body: &Value) -> Vec<u64> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_list_all() {
        let (app, _) = seeded();
        let (status, body) = send(&app, "GET", "/products", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(ids(&body), vec![1, 2, 7, 17]);
    }

    #[tokio::test]
    async fn test_search_numeric_is_exact_id() {
        let (app, _) = seeded();

        let (status, body) = send(&app, "GET", "/products?search=7", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![7]);

        // no fallback to names containing the digits
        let (status, body) = send(&app, "GET", "/products?search=99", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_search_name_ignores_case() {
        let (app, _) = seeded();

        let (_, body) = send(&app, "GET", "/products?search=coca", None).await;
        assert_eq!(ids(&body), vec![1, 2]);

        let (_, body) = send(&app, "GET", "/products?search=%20ZERO%20", None).await;
        assert_eq!(ids(&body), vec![2]);

        let (_, body) = send(&app, "GET", "/products?search=", None).await;
        assert_eq!(ids(&body).len(), 4);
    }

    #[tokio::test]
    async fn test_search_too_long() {
        let (app, _) = seeded();
        let uri = format!("/products?search={}", "a".repeat(101));

        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], json!("Invalid search term."));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let (app, _) = seeded();

        let (status, body) = send(&app, "GET", "/products/17", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], json!("Pudim"));

        let (status, body) = send(&app, "GET", "/products/3", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Product not found."));
    }

    #[tokio::test]
    async fn test_invalid_ids() {
        let (app, _) = seeded();

        for raw in ["abc", "0", "-1", "1.5"] {
            for method in ["GET", "PUT", "DELETE"] {
                let body = (method == "PUT").then(|| json!({ "price": 1.0 }));
                let (status, body) = send(&app, method, &format!("/products/{}", raw), body).await;

                assert_eq!(status, StatusCode::BAD_REQUEST, "{} /products/{}", method, raw);
                assert_eq!(body["message"], json!("Invalid ID. Use a positive integer."));
            }
        }
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let (app, catalog) = seeded();

        let (status, body) = send(
            &app,
            "POST",
            "/products",
            Some(json!({ "name": "Pastel", "price": 8, "sku": " PST-01 " })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], json!("Product created."));
        assert_eq!(
            body["data"],
            json!({ "id": 18, "name": "Pastel", "price": 8.0, "sku": "pst-01", "description": "" })
        );
        assert_eq!(catalog.products().count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_create_on_empty_catalog() {
        let (app, _) = app_with(Vec::new());

        let (status, body) = send(
            &app,
            "POST",
            "/products",
            Some(json!({ "name": "Pastel", "price": 8.5, "sku": "pst", "description": "Carne" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["id"], json!(1));
        assert_eq!(body["data"]["description"], json!("Carne"));
    }

    #[tokio::test]
    async fn test_create_duplicate_sku() {
        let (app, catalog) = seeded();

        let (status, body) = send(
            &app,
            "POST",
            "/products",
            Some(json!({ "name": "Coca", "price": 6, "sku": "  COKE-LATA" })),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], json!(false));
        assert_eq!(catalog.products().count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_create_reports_every_invalid_field() {
        let (app, _) = seeded();

        let (status, body) = send(
            &app,
            "POST",
            "/products",
            Some(json!({ "name": "", "price": "6.00", "description": 3 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], json!("Invalid payload."));
        assert_eq!(body["errors"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (app, catalog) = seeded();

        let (status, body) = send_raw(&app, "POST", "/products", Some("{\"name\": ".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], json!("Malformed JSON body."));

        let (status, _) = send_raw(&app, "PUT", "/products/1", Some("[1, 2".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert_eq!(catalog.products().count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_update_price_only() {
        let (app, catalog) = seeded();
        let before = catalog.products().get_by_id(7).await.unwrap();

        let (status, body) = send(&app, "PUT", "/products/7", Some(json!({ "price": 11.25 }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], json!("Product updated."));

        let after = catalog.products().get_by_id(7).await.unwrap();
        assert_eq!(after.price, 11.25);
        assert_eq!(after.name, before.name);
        assert_eq!(after.sku, before.sku);
        assert_eq!(after.description, before.description);
    }

    #[tokio::test]
    async fn test_update_errors() {
        let (app, _) = seeded();

        let (status, _) = send(&app, "PUT", "/products/99", Some(json!({ "price": 1 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "PUT", "/products/1", Some(json!({ "sku": "PUDIM" }))).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body) = send(&app, "PUT", "/products/1", Some(json!({ "price": -1 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"].as_array().unwrap().len(), 1);

        // keeping its own sku is not a conflict
        let (status, _) = send(&app, "PUT", "/products/1", Some(json!({ "sku": "Coke-Lata" }))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete() {
        let (app, catalog) = seeded();

        let (status, body) = send(&app, "DELETE", "/products/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], json!("Product removed."));
        assert_eq!(body["data"]["sku"], json!("coke-zero-2l"));

        let remaining: Vec<u64> = catalog
            .products()
            .list_or_search(None)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(remaining, vec![1, 7, 17]);
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_catalog_unchanged() {
        let (app, catalog) = seeded();
        let before = catalog.products().list_or_search(None).await.unwrap();

        let (status, body) = send(&app, "DELETE", "/products/5", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], json!(false));
        assert_eq!(catalog.products().list_or_search(None).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = seeded();
        let (status, body) = send(&app, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!({ "status": "ok", "products": 4 }));
    }

    #[tokio::test]
    async fn test_unreadable_store() {
        let dir = std::env::temp_dir().join(format!("menu-api-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("products.json");
        std::fs::write(&path, "{ not json").unwrap();

        let catalog = Catalog::with_store(Arc::new(JsonFileStore::new(&path)));
        let app = create_router(AppState::new(catalog), false);

        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["success"], json!(false));

        let (status, body) = send(&app, "GET", "/products", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body["message"].as_str().unwrap().contains("products.json"));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (app, _) = seeded();
        let (status, body) = send(&app, "GET", "/orders", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], json!("Route not found."));
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let (app, catalog) = seeded();

        let (status, body) = send(&app, "PATCH", "/products", Some(json!({ "price": 1 }))).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Method not allowed."));

        let (status, body) = send(&app, "POST", "/products/1", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["success"], json!(false));

        assert_eq!(catalog.products().count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_cors_permissive() {
        let (app, _) = seeded();
        let request = Request::builder()
            .uri("/products")
            .header("origin", "http://localhost:8081")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
    }
}
