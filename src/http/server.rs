//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with API, static files and SPA fallback
//! - Wire up middleware (tracing, request ID, limits, security headers,
//!   origin guard)
//! - Serve over plain TCP or TLS
//! - Stop gracefully on the shutdown broadcast

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, Router};
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::middleware::origin_guard_middleware;
use crate::http::request::UuidRequestId;
use crate::net::tls::{load_tls_config, TlsError};
use crate::observability::metrics;
use crate::routing;
use crate::security::headers::SecurityHeaders;
use crate::security::origin_guard::{OriginGuard, Whitelist, WhitelistError};

/// Time in-flight TLS connections get to finish after shutdown.
const TLS_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid origin whitelist: {0}")]
    Whitelist(#[from] WhitelistError),

    #[error("Invalid security header: {0}")]
    Header(#[from] axum::http::header::InvalidHeaderValue),

    #[error("Invalid bind address {0:?}")]
    BindAddress(String),

    #[error(transparent)]
    Tls(#[from] TlsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTPS/HTTP server for the single-page app.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a server with only the built-in API routes.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        Self::with_api(config, Router::new())
    }

    /// Create a server, merging `api` under `/api`.
    pub fn with_api(config: ServerConfig, api: Router) -> Result<Self, ServerError> {
        let router = Self::build_router(&config, api)?;
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers run outermost first: request ID, trace, metrics, timeout,
    /// body limit, security headers, origin guard, routes.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, api: Router) -> Result<Router, ServerError> {
        let mut router = routing::app_routes(config, api);

        if config.origin_guard.enabled {
            let whitelist = Whitelist::new(&config.origin_guard.whitelist)?;
            tracing::debug!(
                whitelist = ?whitelist.iter().collect::<Vec<_>>(),
                "Origin guard enabled"
            );
            let guard = Arc::new(OriginGuard::new(whitelist));
            router = router.layer(middleware::from_fn_with_state(guard, origin_guard_middleware));
        } else {
            tracing::warn!("Origin guard disabled");
        }

        if config.headers.enabled {
            router = SecurityHeaders::from_config(&config.headers)?.apply(router);
        }

        Ok(router
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::from_fn(metrics::track_metrics))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId)))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind the configured address and serve until `shutdown` fires, over
    /// TLS unless `listener.tls.enabled` is false.
    pub async fn serve(self, shutdown: broadcast::Receiver<()>) -> Result<(), ServerError> {
        let addr: SocketAddr = self
            .config
            .listener
            .bind_address
            .parse()
            .map_err(|_| ServerError::BindAddress(self.config.listener.bind_address.clone()))?;

        let tls = &self.config.listener.tls;
        if tls.enabled {
            let tls_config = load_tls_config(&tls.cert_path, &tls.key_path).await?;
            let listener = std::net::TcpListener::bind(addr)?;
            self.run_tls(listener, tls_config, shutdown).await
        } else {
            tracing::warn!("TLS disabled, serving plain HTTP");
            let listener = TcpListener::bind(addr).await?;
            self.run(listener, shutdown).await
        }
    }

    /// Serve plain HTTP on `listener`.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            environment = %self.config.environment,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Serve HTTPS on `listener`.
    pub async fn run_tls(
        self,
        listener: std::net::TcpListener,
        tls_config: RustlsConfig,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            environment = %self.config.environment,
            "HTTPS server starting"
        );

        let handle = axum_server::Handle::new();
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            let _ = shutdown.recv().await;
            shutdown_handle.graceful_shutdown(Some(TLS_DRAIN_TIMEOUT));
        });

        axum_server::from_tcp_rustls(listener, tls_config)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}
