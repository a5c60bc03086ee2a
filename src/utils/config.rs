//! Configuration and constants for report runs.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default timeout for Analytics API requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Reporting API v4 endpoint executing report requests
pub const REPORTING_ENDPOINT: &str =
    "https://analyticsreporting.googleapis.com/v4/reports:batchGet";

/// Management API v3 endpoint listing the user's segments
pub const SEGMENTS_ENDPOINT: &str =
    "https://www.googleapis.com/analytics/v3/management/segments";

// Dimensions with a fixed position in every report request.
pub const SEGMENT_DIM: &str = "ga:segment";
pub const DATE_DIM: &str = "ga:date";
pub const COUNTRY_DIM: &str = "ga:country";
pub const PAGE_DIM: &str = "ga:pagePath";

// Default bindings for the two configurable dimensions.
pub const EVENT_ACTION_DIM: &str = "ga:eventAction";
pub const EVENT_LABEL_DIM: &str = "ga:eventLabel";

/// Metric expression every report is keyed on
pub const EVENT_VALUE_METRIC: &str = "ga:eventValue";

/// Prefix the Reporting API expects on segment ids
pub const SEGMENT_ID_PREFIX: &str = "gaid::";

/// Row cap for the single page each run requests
pub const REPORT_PAGE_SIZE: u32 = 100_000;

/// Number of dimensions each report row carries
pub const REPORT_DIMENSIONS: usize = 6;

// CLS is sent to Google Analytics at 1000x, since event values must be
// integers and CLS scores are small fractions.
pub const CLS_SCALE_FACTOR: f64 = 1000.0;

/// Per-view reporting options.
///
/// Views that opted into a custom event layout carry their own metric
/// labels and dimension bindings; everything else falls back to
/// [`ViewOpts::default`], which matches the standard web-vitals setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewOpts {
    /// Whether these options are in effect for the view
    pub active: bool,

    /// Dimension carrying the metric's custom label
    pub metric_name_dim: String,

    /// Dimension carrying the unique per-observation metric id
    pub metric_id_dim: String,

    /// Custom label used for Largest Contentful Paint events
    pub lcp_name: String,

    /// Custom label used for First Input Delay events
    pub fid_name: String,

    /// Custom label used for Cumulative Layout Shift events
    pub cls_name: String,

    /// Raw filter expression applied on top of the metric-name filter
    pub filters: String,
}

impl Default for ViewOpts {
    fn default() -> Self {
        Self {
            active: false,
            metric_name_dim: EVENT_ACTION_DIM.to_string(),
            metric_id_dim: EVENT_LABEL_DIM.to_string(),
            lcp_name: "LCP".to_string(),
            fid_name: "FID".to_string(),
            cls_name: "CLS".to_string(),
            filters: String::new(),
        }
    }
}

impl ViewOpts {
    /// Options in effect for a run: the supplied ones when present and
    /// active, a fresh default value otherwise.
    pub fn effective(opts: Option<&ViewOpts>) -> ViewOpts {
        match opts {
            Some(opts) if opts.active => opts.clone(),
            _ => ViewOpts::default(),
        }
    }
}
