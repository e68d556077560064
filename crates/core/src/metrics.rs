//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - History store (events recorded, events dropped)
//! - Recommendation engine (request outcomes, seeds, feed sizes)
//! - Metadata catalog client (request counts, latency)

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// History Metrics
// =============================================================================

/// Watch events accepted into the history store.
pub static HISTORY_EVENTS_RECORDED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "reelfeed_history_events_recorded_total",
        "Total watch events recorded",
    )
    .unwrap()
});

/// Watch events refused or discarded, by reason.
pub static HISTORY_EVENTS_DROPPED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "reelfeed_history_events_dropped_total",
            "Total watch events dropped",
        ),
        &["reason"], // "invalid_media_id", "schema"
    )
    .unwrap()
});

// =============================================================================
// Recommendation Metrics
// =============================================================================

/// Recommendation requests by outcome.
pub static RECOMMENDATION_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "reelfeed_recommendation_requests_total",
            "Total recommendation requests",
        ),
        &["outcome"], // "personalized", "fallback"
    )
    .unwrap()
});

/// Feeds that needed a top-up from the trending pool.
pub static TRENDING_FILLS: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "reelfeed_trending_fills_total",
        "Recommendation feeds topped up from the trending pool",
    )
    .unwrap()
});

/// High-interest seeds extracted per request.
pub static RECOMMENDATION_SEEDS: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "reelfeed_recommendation_seeds",
            "Number of high-interest seeds per recommendation request",
        )
        .buckets(vec![0.0, 1.0, 2.0, 3.0, 5.0]),
    )
    .unwrap()
});

/// Final feed sizes.
pub static RECOMMENDATION_RESULTS: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "reelfeed_recommendation_results",
            "Number of movies returned per recommendation request",
        )
        .buckets(vec![0.0, 5.0, 10.0, 15.0, 20.0, 30.0]),
    )
    .unwrap()
});

// =============================================================================
// Catalog Metrics
// =============================================================================

/// Metadata service request duration.
pub static CATALOG_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "reelfeed_catalog_request_duration_seconds",
            "Duration of metadata service calls",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["operation"],
    )
    .unwrap()
});

/// Metadata service requests total.
pub static CATALOG_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "reelfeed_catalog_requests_total",
            "Total metadata service requests",
        ),
        &["operation", "status"], // status: "success", "error"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // History
        Box::new(HISTORY_EVENTS_RECORDED.clone()),
        Box::new(HISTORY_EVENTS_DROPPED.clone()),
        // Recommendations
        Box::new(RECOMMENDATION_REQUESTS.clone()),
        Box::new(TRENDING_FILLS.clone()),
        Box::new(RECOMMENDATION_SEEDS.clone()),
        Box::new(RECOMMENDATION_RESULTS.clone()),
        // Catalog
        Box::new(CATALOG_REQUEST_DURATION.clone()),
        Box::new(CATALOG_REQUESTS.clone()),
    ]
}
