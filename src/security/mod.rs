//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → origin_guard.rs (Origin / Referer against the whitelist)
//!     → downstream handlers (static files, API)
//!
//! Outgoing response:
//!     → headers.rs (X-Frame-Options, Content-Security-Policy)
//! ```
//!
//! # Design Decisions
//! - The guard is a pure function of (whitelist, request headers)
//! - Fail closed on malformed input: unparsable headers never match
//! - Exactly one frame-options policy is emitted

pub mod headers;
pub mod origin_guard;

pub use headers::SecurityHeaders;
pub use origin_guard::{Decision, GuardError, GuardRequest, OriginGuard, Whitelist};
