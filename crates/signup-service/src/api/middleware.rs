//! Request logging.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Log one line per request with its outcome and latency.
///
/// Server errors are already recorded with their trace by the controller
/// decorator, so this only notes that the request failed.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        warn!(%method, %path, %status, elapsed_ms, "Request failed");
    } else if status.is_client_error() {
        info!(%method, %path, %status, elapsed_ms, "Request rejected");
    } else {
        debug!(%method, %path, %status, elapsed_ms, "Request served");
    }

    response
}
