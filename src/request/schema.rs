//! Report request schema for the Analytics Reporting API.
//!
//! These structs serialize to the exact JSON the Reporting API v4
//! expects inside `reports:batchGet`. Field names, nesting shape and
//! enum literals are a compatibility contract with the service.

use crate::filters::DimensionFilter;
use serde::{Deserialize, Serialize};

/// One report request, executed remotely to produce the row sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    /// Analytics view (profile) the report runs against
    pub view_id: String,

    /// Row cap for the single page this crate requests
    pub page_size: u32,

    /// Emit dimension combinations with zero observations too
    pub include_empty_rows: bool,

    pub date_ranges: Vec<DateRange>,

    /// Exactly two segments: A then B
    pub segments: Vec<SegmentRef>,

    pub metrics: Vec<MetricRef>,

    /// Positional order is a contract with row parsing: segment, date,
    /// metric name, country, page path, metric id.
    pub dimensions: Vec<DimensionRef>,

    pub dimension_filter_clauses: DimensionFilterClauses,

    pub order_bys: Vec<OrderBy>,
}

/// Inclusive date range in `YYYY-MM-DD` wire form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

/// Reference to a segment by its `gaid::`-prefixed id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRef {
    pub segment_id: String,
}

/// Reference to a metric by expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRef {
    pub expression: String,
}

/// Reference to a dimension by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionRef {
    pub name: String,
}

/// Filter clauses combined under one logical operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionFilterClauses {
    pub operator: FilterCombinator,
    pub filters: Vec<DimensionFilter>,
}

/// How the clauses in a filter list combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterCombinator {
    And,
    Or,
}

/// One sort key applied to the report's rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    pub field_name: String,
    pub sort_order: SortOrder,
}

/// Sort direction literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    Ascending,
    Descending,
}
