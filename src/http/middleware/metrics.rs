//! Per-request metrics middleware.

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::request::request_id_of;
use crate::observability::metrics;

/// Records count and latency labelled by the matched route template,
/// so `/personnes/1` and `/personnes/2` share a series.
pub async fn track_metrics(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let request_id = request_id_of(&request).to_string();

    let response = next.run(request).await;
    let status = response.status().as_u16();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        route = %route,
        status,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );
    metrics::record_request(&method, &route, status, start);

    response
}
