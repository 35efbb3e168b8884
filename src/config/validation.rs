//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Whitelist entries must be base URLs
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ServerConfig;
use crate::security::headers::SecurityHeaders;
use crate::security::origin_guard::{Whitelist, WhitelistError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("observability.metrics_address {0:?} is not a socket address")]
    MetricsAddress(String),

    #[error("origin_guard.whitelist: {0}")]
    Whitelist(#[from] WhitelistError),

    #[error("listener.tls: {0} must not be empty")]
    TlsPath(&'static str),

    #[error("headers: {0}")]
    Headers(String),

    #[error("static_files.dev_roots must name at least one directory")]
    NoDevRoots,

    #[error("static_files.template_prefix {0:?} must be an absolute path below '/'")]
    TemplatePrefix(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("limits.max_body_size must be greater than zero")]
    ZeroBodyLimit,
}

pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    let tls = &config.listener.tls;
    if tls.enabled {
        if tls.cert_path.as_os_str().is_empty() {
            errors.push(ValidationError::TlsPath("cert_path"));
        }
        if tls.key_path.as_os_str().is_empty() {
            errors.push(ValidationError::TlsPath("key_path"));
        }
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    for entry in &config.origin_guard.whitelist {
        if let Err(e) = Whitelist::new([entry]) {
            errors.push(e.into());
        }
    }

    if let Err(e) = SecurityHeaders::from_config(&config.headers) {
        errors.push(ValidationError::Headers(e.to_string()));
    }

    if config.static_files.dev_roots.is_empty() {
        errors.push(ValidationError::NoDevRoots);
    }
    let prefix = &config.static_files.template_prefix;
    if !prefix.starts_with('/') || prefix.trim_end_matches('/').is_empty() {
        errors.push(ValidationError::TemplatePrefix(
            config.static_files.template_prefix.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
