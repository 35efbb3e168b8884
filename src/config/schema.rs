//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Which static file layout to serve.
    pub environment: Environment,

    /// Origin/Referer validation settings.
    pub origin_guard: OriginGuardConfig,

    /// Security response headers.
    pub headers: HeadersConfig,

    /// Static file roots and SPA fallback.
    pub static_files: StaticFilesConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request size limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8001").
    pub bind_address: String,

    /// TLS configuration. On by default; the default whitelist is https.
    pub tls: TlsConfig,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8001".to_string(),
            tls: TlsConfig::default(),
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TlsConfig {
    /// Serve HTTPS. When false the listener speaks plain HTTP.
    pub enabled: bool,

    /// Path to certificate file (PEM).
    pub cert_path: PathBuf,

    /// Path to private key file (PEM).
    pub key_path: PathBuf,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cert_path: PathBuf::from("vulnapp-cert.pem"),
            key_path: PathBuf::from("vulnapp-key.pem"),
        }
    }
}

/// Deployment environment, selects the static file layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Serve the optimized bundle from `build_root`.
    Build,
    /// Serve sources straight from the dev roots.
    #[default]
    Development,
}

impl Environment {
    /// Parse an environment name as found in `APP_ENV`.
    ///
    /// Anything other than `build` selects development, matching how the
    /// server has always treated unknown environment names.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("build") {
            Environment::Build
        } else {
            Environment::Development
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Build => f.write_str("build"),
            Environment::Development => f.write_str("development"),
        }
    }
}

/// Origin guard configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OriginGuardConfig {
    /// Enable the origin/referer check.
    pub enabled: bool,

    /// Trusted base URLs (`scheme://host[:port]`).
    pub whitelist: Vec<String>,
}

impl Default for OriginGuardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            whitelist: vec!["https://localhost:8001".to_string()],
        }
    }
}

/// `X-Frame-Options` policy. Exactly one value is ever emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
pub enum FrameOptions {
    #[default]
    #[serde(rename = "DENY", alias = "deny")]
    Deny,
    #[serde(rename = "SAMEORIGIN", alias = "sameorigin")]
    SameOrigin,
}

impl FrameOptions {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameOptions::Deny => "DENY",
            FrameOptions::SameOrigin => "SAMEORIGIN",
        }
    }
}

/// Security response header configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HeadersConfig {
    /// Emit security headers at all.
    pub enabled: bool,

    /// `X-Frame-Options` value.
    pub frame_options: FrameOptions,

    /// CSP directives in emission order, e.g. `"img-src" = "'self' data:"`.
    pub content_security_policy: IndexMap<String, String>,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        let content_security_policy = [
            ("default-src", "'self'"),
            ("script-src", "'self'"),
            ("style-src", "'self'"),
            ("img-src", "'self' data:"),
            ("frame-ancestors", "'none'"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            enabled: true,
            frame_options: FrameOptions::Deny,
            content_security_policy,
        }
    }
}

/// Static file configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Root of the optimized bundle (build environment).
    pub build_root: PathBuf,

    /// Roots searched in order in the development environment.
    /// The first root holds `index.html`.
    pub dev_roots: Vec<PathBuf>,

    /// Template URL prefix; misses below it are 404s instead of the SPA index.
    pub template_prefix: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            build_root: PathBuf::from("build"),
            dev_roots: vec![PathBuf::from("src/client"), PathBuf::from("tmp")],
            template_prefix: "/app".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
