//! Origin guard middleware.
//! Short-circuits untrusted state-changing requests with 403.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::request::request_id;
use crate::observability::metrics;
use crate::security::{Decision, GuardRequest, OriginGuard};

pub async fn origin_guard_middleware(
    State(guard): State<Arc<OriginGuard>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let decision = guard.evaluate(&GuardRequest::from_headers(
        request.method(),
        request.headers(),
    ));

    match decision {
        Decision::Allow => next.run(request).await,
        Decision::Reject(err) => {
            tracing::warn!(
                request_id = %request_id(request.headers()),
                method = %request.method(),
                path = %request.uri().path(),
                header = err.header_name(),
                value = %err.value(),
                "Rejected request from untrusted origin"
            );
            metrics::record_origin_rejected(err.header_name());
            err.into_response()
        }
    }
}
