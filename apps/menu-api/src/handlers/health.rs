//! Health check endpoint.
//!
//! `GET /health` reads the catalog once; a store that cannot be read or
//! parsed reports 503.

use axum::extract::State;
use axum::Json;
use menu_core::Envelope;
use serde::Serialize;
use tracing::warn;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Health payload.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub products: usize,
}

pub async fn health(State(state): State<AppState>) -> ApiResult<Json<Envelope<HealthStatus>>> {
    match state.catalog.products().count().await {
        Ok(products) => Ok(Json(Envelope::ok(HealthStatus {
            status: "ok",
            products,
        }))),
        Err(e) => {
            warn!(error = %e, store = %state.catalog.location(), "Health check failed");
            Err(ApiError::unavailable())
        }
    }
}
