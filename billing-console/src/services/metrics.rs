//! Prometheus metrics for billing-console.

use prometheus::{opts, register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use std::sync::OnceLock;

/// Upstream request counter by service and outcome.
pub static UPSTREAM_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Summary derivation counter by billing mode.
pub static SUMMARY_DERIVATIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize all metrics. Call once at startup; safe to call again.
pub fn init_metrics() {
    UPSTREAM_REQUESTS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "console_upstream_requests_total",
                "Upstream requests by service and outcome"
            ),
            &["service", "outcome"]
        )
        .expect("Failed to register UPSTREAM_REQUESTS_TOTAL")
    });

    SUMMARY_DERIVATIONS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "console_summary_derivations_total",
                "Billing summary derivations by mode"
            ),
            &["mode"]
        )
        .expect("Failed to register SUMMARY_DERIVATIONS_TOTAL")
    });
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .expect("Failed to encode metrics");
    String::from_utf8(buffer).expect("Failed to convert metrics to string")
}

/// Record an upstream request outcome.
pub fn record_upstream_request(service: &str, outcome: &str) {
    if let Some(counter) = UPSTREAM_REQUESTS_TOTAL.get() {
        counter.with_label_values(&[service, outcome]).inc();
    }
}

/// Record a summary derivation by mode (trial, paid, no_license).
pub fn record_summary_derivation(mode: &str) {
    if let Some(counter) = SUMMARY_DERIVATIONS_TOTAL.get() {
        counter.with_label_values(&[mode]).inc();
    }
}
