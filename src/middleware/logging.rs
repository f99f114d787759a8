//! Request logging middleware
//!
//! One structured line per request. Plain 404s stay at info so crawler
//! noise does not drown the warn channel.

use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    match status {
        s if s.is_server_error() => warn!(
            method = %method,
            path = %path,
            status = s.as_u16(),
            latency_ms = %format!("{latency_ms:.2}"),
            "request failed"
        ),
        s if s.is_client_error() && s != StatusCode::NOT_FOUND => warn!(
            method = %method,
            path = %path,
            status = s.as_u16(),
            latency_ms = %format!("{latency_ms:.2}"),
            "request rejected"
        ),
        s => info!(
            method = %method,
            path = %path,
            status = s.as_u16(),
            latency_ms = %format!("{latency_ms:.2}"),
            "request completed"
        ),
    }

    response
}
