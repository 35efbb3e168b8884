//! Request routing.
//!
//! # Data Flow
//! ```text
//! /api/...            → api.rs (built-in + embedder routes, JSON 404)
//! everything else     → static_files.rs
//!                          → static roots, in order
//!                          → <template_prefix>/* miss → 404
//!                          → any other miss → index.html (SPA deep links)
//! ```

pub mod api;
pub mod static_files;

use axum::Router;

use crate::config::ServerConfig;

/// Assemble the application routes. `extra_api` is merged under `/api`.
pub fn app_routes(config: &ServerConfig, extra_api: Router) -> Router {
    Router::new()
        .nest("/api", api::router(extra_api))
        .fallback_service(static_files::router(
            &config.static_files,
            config.environment,
        ))
}
