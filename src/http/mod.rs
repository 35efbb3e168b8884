//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, layer order, plain or TLS serve)
//!     → request.rs (request ID)
//!     → middleware/origin_check.rs (403 on untrusted Origin / Referer)
//!     → routing (API, static files, SPA fallback)
//!     → response.rs (error bodies)
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id, UuidRequestId, X_REQUEST_ID};
pub use server::{HttpServer, ServerError};
