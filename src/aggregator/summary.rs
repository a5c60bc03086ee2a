//! Summary structure produced by the aggregation pass.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three Web Vitals metrics every observation must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Metric {
    /// Largest Contentful Paint
    Lcp,
    /// First Input Delay
    Fid,
    /// Cumulative Layout Shift
    Cls,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Lcp, Metric::Fid, Metric::Cls];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Lcp => "LCP",
            Metric::Fid => "FID",
            Metric::Cls => "CLS",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value sequences keyed by segment display name, in insertion order
pub type SegmentSeries = IndexMap<String, Vec<f64>>;

/// A container holding one `T` per canonical metric.
///
/// Serializes with the metric names as keys, the shape chart and table
/// renderers consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricMap<T> {
    #[serde(rename = "LCP")]
    pub lcp: T,

    #[serde(rename = "FID")]
    pub fid: T,

    #[serde(rename = "CLS")]
    pub cls: T,
}

impl<T> MetricMap<T> {
    /// Build a map by invoking `make` once per metric
    pub fn build(mut make: impl FnMut() -> T) -> Self {
        Self {
            lcp: make(),
            fid: make(),
            cls: make(),
        }
    }

    pub fn get(&self, metric: Metric) -> &T {
        match metric {
            Metric::Lcp => &self.lcp,
            Metric::Fid => &self.fid,
            Metric::Cls => &self.cls,
        }
    }

    pub fn get_mut(&mut self, metric: Metric) -> &mut T {
        match metric {
            Metric::Lcp => &mut self.lcp,
            Metric::Fid => &mut self.fid,
            Metric::Cls => &mut self.cls,
        }
    }
}

/// Totals and breakdowns for one canonical metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Every observed value, in report order
    pub values: Vec<f64>,

    /// Breakdown by segment
    pub segments: SegmentSeries,

    /// Breakdown by date, then segment
    pub dates: IndexMap<String, SegmentSeries>,
}

/// Per-page / per-country breakdown bucket.
///
/// `count` tracks how many observations landed in the bucket. It exists
/// to rank pages and countries and takes no part in the value
/// sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionBucket {
    #[serde(flatten)]
    pub metrics: MetricMap<SegmentSeries>,

    pub count: u64,
}

impl DimensionBucket {
    /// Fresh bucket: an empty series per metric and a zero count
    pub fn new(segment_template: impl FnMut() -> SegmentSeries) -> Self {
        Self {
            metrics: MetricMap::build(segment_template),
            count: 0,
        }
    }
}

/// The full nested summary for one report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsSummary {
    /// Per-metric values with segment and date breakdowns
    pub metrics: MetricMap<MetricSummary>,

    /// Per-country buckets, ordered by descending observation count
    pub countries: IndexMap<String, DimensionBucket>,

    /// Per-page buckets, ordered by descending observation count
    pub pages: IndexMap<String, DimensionBucket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_map_indexes_by_metric() {
        let mut map = MetricMap::build(Vec::<f64>::new);
        map.get_mut(Metric::Cls).push(0.1);

        assert!(map.get(Metric::Lcp).is_empty());
        assert_eq!(map.get(Metric::Cls), &vec![0.1]);
    }

    #[test]
    fn test_metric_serializes_to_canonical_name() {
        assert_eq!(serde_json::to_string(&Metric::Lcp).unwrap(), "\"LCP\"");
        assert_eq!(Metric::Fid.to_string(), "FID");
    }
}
