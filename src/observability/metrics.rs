//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by method, route, status
//! - `gateway_request_duration_seconds` (histogram): handler latency
//! - `gateway_bridge_calls_total` (counter): legacy round trips by outcome
//! - `gateway_store_records` (gauge): records currently held
//!
//! Recording is a no-op until [`init_metrics`] installs a recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed API request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    counter!(
        "gateway_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("gateway_request_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record the outcome of one legacy round trip (`delivered`, `transport`, `parse`).
pub fn record_bridge_call(outcome: &'static str) {
    counter!("gateway_bridge_calls_total", "outcome" => outcome).increment(1);
}

pub fn record_store_size(len: usize) {
    gauge!("gateway_store_records").set(len as f64);
}
