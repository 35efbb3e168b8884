//! HTTPS single-page-app server with origin/referer validation.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;
pub mod security;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use security::{Decision, GuardError, GuardRequest, OriginGuard, Whitelist};
