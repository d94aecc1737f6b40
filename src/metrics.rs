//! Request metrics recorded through the `metrics` facade.
//!
//! No exporter is installed here; whichever recorder the deployment installs
//! receives these series. Without one, recording is a no-op.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Collector failures counter metric name.
pub const METRIC_SYSTEM_INFO_FAILURES: &str = "system_info_failures_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_counter!(
        METRIC_SYSTEM_INFO_FAILURES,
        "Total number of failed host introspection attempts"
    );

    debug!("Metrics initialized");
}

/// Record one served request with its latency.
pub fn record_http_request(start: Instant, endpoint: &str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
    counter!(
        METRIC_HTTP_REQUESTS,
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Increment collector failures counter.
pub fn inc_system_info_failures() {
    counter!(METRIC_SYSTEM_INFO_FAILURES).increment(1);
}

/// Label for a request path. Unknown paths share one label.
pub fn endpoint_label(path: &str) -> &'static str {
    match path {
        "/" => "root",
        "/health" => "health",
        _ => "unmatched",
    }
}
