//! Metrics for greeting requests and upstream latency.
//!
//! Without an installed recorder every call here is a no-op.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Upstream greeting latency metric name.
pub const METRIC_GREETING_LATENCY: &str = "greeting_fetch_latency_ms";
/// Greetings served counter metric name.
pub const METRIC_GREETINGS_SERVED: &str = "greetings_served_total";
/// Greetings failed counter metric name.
pub const METRIC_GREETINGS_FAILED: &str = "greetings_failed_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_GREETING_LATENCY,
        "External greeting API latency in milliseconds"
    );
    describe_counter!(
        METRIC_GREETINGS_SERVED,
        "Total number of home requests answered with a greeting"
    );
    describe_counter!(
        METRIC_GREETINGS_FAILED,
        "Total number of home requests answered with an error"
    );

    debug!("Metrics initialized");
}

/// Record the latency of one greeting fetch.
pub fn record_greeting_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_GREETING_LATENCY).record(latency_ms);
}

/// Increment greetings served counter.
pub fn inc_greetings_served() {
    counter!(METRIC_GREETINGS_SERVED).increment(1);
}

/// Increment greetings failed counter.
pub fn inc_greetings_failed() {
    counter!(METRIC_GREETINGS_FAILED).increment(1);
}
