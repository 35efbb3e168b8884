//! Static file serving with SPA fallback.
//!
//! # Responsibilities
//! - Serve the configured roots for the active environment
//! - 404 for misses below the template prefix (stale `templateUrl`s)
//! - Serve `index.html` for every other miss so client-side deep links work
//! - Only GET and HEAD ever see a file; other methods end in a 404

use std::path::{Path, PathBuf};

use axum::{
    routing::{any, get_service},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::{Environment, StaticFilesConfig};
use crate::http::response::not_found;

/// The static file service for `environment`.
pub fn router(config: &StaticFilesConfig, environment: Environment) -> Router {
    let roots = roots(config, environment);
    let index = roots
        .first()
        .map(|root| root.join("index.html"))
        .unwrap_or_else(|| PathBuf::from("index.html"));

    // Innermost first: each root falls through to the next, the last to the
    // SPA fallback.
    roots
        .iter()
        .rev()
        .fold(spa_fallback(&index, &config.template_prefix), |next, root| {
            Router::new().fallback_service(
                ServeDir::new(root)
                    .call_fallback_on_method_not_allowed(true)
                    .fallback(next),
            )
        })
}

/// Roots searched in order.
pub fn roots(config: &StaticFilesConfig, environment: Environment) -> Vec<PathBuf> {
    match environment {
        Environment::Build => vec![config.build_root.clone()],
        Environment::Development => config.dev_roots.clone(),
    }
}

fn spa_fallback(index: &Path, template_prefix: &str) -> Router {
    let prefix = template_prefix.trim_end_matches('/');
    Router::new()
        .route(&format!("{prefix}/"), any(not_found))
        .route(&format!("{prefix}/{{*rest}}"), any(not_found))
        .fallback_service(get_service(ServeFile::new(index)).fallback(not_found))
}
