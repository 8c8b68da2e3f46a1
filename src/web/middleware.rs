//! HTTP middleware

use axum::{
    extract::Request,
    http::{Method, Uri},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, field, info, info_span, warn};

/// Request logging middleware
///
/// Runs each request inside a `request` span carrying a generated request ID.
/// The span's `operation` field is filled in by the GraphQL handler, so every
/// log line of a GraphQL call names the operation it belongs to.
pub async fn request_logging_middleware(
    method: Method,
    uri: Uri,
    request: Request,
    next: Next,
) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();
    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
        operation = field::Empty,
    );

    async move {
        let start = Instant::now();
        let response = next.run(request).await;
        let status = response.status().as_u16();
        let duration_ms = start.elapsed().as_millis();

        if status >= 400 {
            warn!(status, duration_ms, "HTTP request completed with error");
        } else {
            info!(status, duration_ms, "HTTP request completed");
        }

        response
    }
    .instrument(span)
    .await
}
