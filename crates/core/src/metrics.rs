//! Prometheus metrics for ticket submission.
//!
//! Registered into the server's registry via [`all_metrics`].

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};

/// Tickets created, by where the identifier came from.
pub static SUBMISSIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "support_tickets_submissions_total",
            "Total tickets created",
        ),
        &["source"], // "remote", "fallback"
    )
    .unwrap()
});

/// Upstream exchanges that ended in a fallback id, by failure kind.
pub static UPSTREAM_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "support_tickets_upstream_failures_total",
            "Total failed support API exchanges",
        ),
        &["kind"], // "http_status", "timeout", "network", "invalid_body"
    )
    .unwrap()
});

/// Duration of the support API exchange in seconds.
pub static UPSTREAM_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "support_tickets_upstream_duration_seconds",
            "Duration of support API calls",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["status"], // "success", "error"
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(SUBMISSIONS_TOTAL.clone()),
        Box::new(UPSTREAM_FAILURES.clone()),
        Box::new(UPSTREAM_DURATION.clone()),
    ]
}
