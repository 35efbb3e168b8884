//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → tls.rs (TLS handshake unless disabled, rustls via axum-server)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - TLS is optional; plain HTTP is served when no certificate is configured
//! - Certificate problems are fatal at startup, never at first handshake

pub mod tls;

pub use tls::{load_tls_config, TlsError};
