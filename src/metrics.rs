//! Request metrics.
//!
//! Recorded through the `metrics` facade; nothing is exported unless the
//! embedding application installs a recorder.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Requests issued counter metric name.
pub const METRIC_REQUESTS: &str = "gamma_requests_total";
/// Failed requests counter metric name.
pub const METRIC_REQUEST_ERRORS: &str = "gamma_request_errors_total";
/// Request latency metric name.
pub const METRIC_REQUEST_LATENCY: &str = "gamma_request_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup, after installing a recorder.
pub fn init_metrics() {
    describe_counter!(METRIC_REQUESTS, "Total number of Gamma API requests issued");
    describe_counter!(
        METRIC_REQUEST_ERRORS,
        "Total number of Gamma API requests that failed"
    );
    describe_histogram!(
        METRIC_REQUEST_LATENCY,
        "Gamma API request latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Record one finished request.
///
/// `outcome` is `"ok"` or a short error class such as `"not_found"`.
pub fn record_request(start: Instant, path: &str, outcome: &'static str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    let route = route_label(path);
    counter!(METRIC_REQUESTS, "route" => route.clone()).increment(1);
    if outcome != "ok" {
        counter!(METRIC_REQUEST_ERRORS, "route" => route.clone(), "outcome" => outcome)
            .increment(1);
    }
    histogram!(METRIC_REQUEST_LATENCY, "route" => route).record(latency_ms);
}

/// First path segment, so per-id paths share one label.
fn route_label(path: &str) -> String {
    path.trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
