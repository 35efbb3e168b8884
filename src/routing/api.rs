//! API routes mounted under `/api`.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::http::response::not_found;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Built-in routes merged with `extra`. Unknown API paths are 404s, never
/// the SPA index.
pub fn router(extra: Router) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(extra)
        .fallback(not_found)
}
