//! Security response headers.
//!
//! # Responsibilities
//! - Serialize the configured CSP directives into one header value
//! - Emit a single `X-Frame-Options` policy
//! - Attach both to every response, rejected requests included

use axum::{
    http::{
        header::{InvalidHeaderValue, CONTENT_SECURITY_POLICY, X_FRAME_OPTIONS},
        HeaderValue,
    },
    Router,
};
use indexmap::IndexMap;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::HeadersConfig;

/// Join directives as `name value; name value`.
///
/// Whitespace around names and values is dropped, so a value read from a
/// multi-line TOML string keeps no trailing newline. Control characters
/// inside a value are kept and make the header invalid.
pub fn content_security_policy(directives: &IndexMap<String, String>) -> String {
    directives
        .iter()
        .map(|(name, value)| {
            let value = value.trim();
            if value.is_empty() {
                name.trim().to_string()
            } else {
                format!("{} {}", name.trim(), value)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Pre-built header values, validated once at startup.
#[derive(Debug, Clone)]
pub struct SecurityHeaders {
    frame_options: HeaderValue,
    content_security_policy: Option<HeaderValue>,
}

impl SecurityHeaders {
    pub fn from_config(config: &HeadersConfig) -> Result<Self, InvalidHeaderValue> {
        let content_security_policy = if config.content_security_policy.is_empty() {
            None
        } else {
            Some(HeaderValue::from_str(&content_security_policy(
                &config.content_security_policy,
            ))?)
        };

        Ok(Self {
            frame_options: HeaderValue::from_static(config.frame_options.as_str()),
            content_security_policy,
        })
    }

    pub fn frame_options(&self) -> &HeaderValue {
        &self.frame_options
    }

    pub fn content_security_policy(&self) -> Option<&HeaderValue> {
        self.content_security_policy.as_ref()
    }

    /// Wrap `router` so every response carries the headers, replacing any
    /// value a handler may have set.
    pub fn apply(self, router: Router) -> Router {
        let router = router.layer(SetResponseHeaderLayer::overriding(
            X_FRAME_OPTIONS,
            self.frame_options,
        ));

        match self.content_security_policy {
            Some(csp) => router.layer(SetResponseHeaderLayer::overriding(
                CONTENT_SECURITY_POLICY,
                csp,
            )),
            None => router,
        }
    }
}
