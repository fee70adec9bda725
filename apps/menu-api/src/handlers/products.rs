//! Product endpoints.
//!
//! ## Routes
//! ```text
//! GET    /products?search=<term>   list, id lookup, or name search
//! GET    /products/{id}            one product
//! POST   /products                 create
//! PUT    /products/{id}            partial update
//! DELETE /products/{id}            remove, returns the removed record
//! ```

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use menu_core::validation::parse_product_id;
use menu_core::{Envelope, Product, ProductPayload};
use menu_db::DbError;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// `GET /products` query string.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

/// Parses the `{id}` path segment.
fn product_id(raw: &str) -> ApiResult<u64> {
    parse_product_id(raw).map_err(|e| {
        debug!(raw, error = %e, "Rejected product id");
        ApiError::invalid_id()
    })
}

pub async fn list_products(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Envelope<Vec<Product>>>> {
    let Query(params) = params?;

    let products = state
        .catalog
        .products()
        .list_or_search(params.search.as_deref())
        .await
        .map_err(|e| match e {
            DbError::Validation(errors) => {
                ApiError::new(StatusCode::BAD_REQUEST, "Invalid search term.")
                    .with_errors(errors.iter().map(|e| e.to_string()).collect())
            }
            other => other.into(),
        })?;

    Ok(Json(Envelope::ok(products)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Envelope<Product>>> {
    let id = product_id(&raw_id)?;
    let product = state.catalog.products().get_by_id(id).await?;

    Ok(Json(Envelope::ok(product)))
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<Product>>)> {
    let Json(payload) = body?;
    let product = state.catalog.products().create(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok_with_message(product, "Product created.")),
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> ApiResult<Json<Envelope<Product>>> {
    let id = product_id(&raw_id)?;
    let Json(payload) = body?;
    let product = state.catalog.products().update(id, &payload).await?;

    Ok(Json(Envelope::ok_with_message(product, "Product updated.")))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Envelope<Product>>> {
    let id = product_id(&raw_id)?;
    let removed = state.catalog.products().delete(id).await?;

    Ok(Json(Envelope::ok_with_message(removed, "Product removed.")))
}
