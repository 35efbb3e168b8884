//! Request middleware.

pub mod origin_check;

pub use origin_check::origin_guard_middleware;
