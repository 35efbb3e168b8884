//! Error responses.
//!
//! # Responsibilities
//! - Map origin guard rejections to 403 Forbidden
//! - Render the 404 body for unknown template URLs

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::security::GuardError;

impl IntoResponse for GuardError {
    fn into_response(self) -> Response {
        (StatusCode::FORBIDDEN, self.to_string()).into_response()
    }
}

/// Body of a 404 response.
#[derive(Debug, Clone, Serialize)]
pub struct NotFound {
    pub status: u16,
    pub message: &'static str,
    pub url: String,
}

impl NotFound {
    pub fn for_uri(uri: &Uri) -> Self {
        Self {
            status: StatusCode::NOT_FOUND.as_u16(),
            message: "Not Found",
            url: uri.to_string(),
        }
    }
}

impl IntoResponse for NotFound {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, Json(self)).into_response()
    }
}

/// Handler answering every request with a 404.
pub async fn not_found(uri: Uri) -> NotFound {
    NotFound::for_uri(&uri)
}
