//! Aggregation of report rows into the Web Vitals summary.
//!
//! This module transforms fetched report rows into:
//! - Per-metric value sequences with segment and date breakdowns
//! - Per-page and per-country buckets ranked by observation count

pub mod engine;
pub mod summary;

// Re-export main types and functions
pub use engine::aggregate_report;
pub use summary::{DimensionBucket, Metric, MetricMap, MetricSummary, SegmentSeries, VitalsSummary};
