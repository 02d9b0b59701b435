//! Per-request access log.

use std::time::Instant;

use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, info, warn};

/// Logs method, path, status and duration of every request.
///
/// CORS probes are logged at debug level, server errors at warn.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis();

    if method == Method::OPTIONS {
        debug!(%method, %path, status, elapsed_ms, "CORS probe answered");
    } else if response.status().is_server_error() {
        warn!(%method, %path, status, elapsed_ms, "Request failed");
    } else {
        info!(%method, %path, status, elapsed_ms, "Request handled");
    }

    response
}
