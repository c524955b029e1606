use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Request logging middleware
///
/// Logs method and path on entry, then method, path, status and elapsed
/// time once the inner service has answered. The response is passed through
/// unchanged.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    tracing::info!(%method, %path, "incoming request");

    let response = next.run(request).await;

    let elapsed = started.elapsed();
    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "responded"
    );

    response
}
