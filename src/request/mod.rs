//! Building report requests.
//!
//! Combines the per-view options, the date range and the two experiment
//! segments into the descriptor the Reporting API executes. Pure
//! functions of their inputs; nothing here performs I/O.

pub mod schema;

// Re-export main types
pub use schema::{
    DateRange, DimensionFilterClauses, DimensionRef, FilterCombinator, MetricRef, OrderBy,
    ReportRequest, SegmentRef, SortOrder,
};

use crate::filters::{parse_filters, DimensionFilter, FilterOperator};
use crate::utils::config::{
    ViewOpts, COUNTRY_DIM, DATE_DIM, EVENT_VALUE_METRIC, PAGE_DIM, REPORT_PAGE_SIZE, SEGMENT_DIM,
    SEGMENT_ID_PREFIX,
};
use crate::utils::error::FilterError;
use chrono::NaiveDate;

/// Caller-supplied parameters for one report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportParams {
    /// Analytics view id
    pub view_id: String,

    /// First day of the reporting window
    pub start_date: NaiveDate,

    /// Last day of the reporting window
    pub end_date: NaiveDate,

    /// Raw segment ids, without the `gaid::` prefix
    pub segment_a: String,
    pub segment_b: String,
}

/// Build the report request for one run.
///
/// The first filter clause always restricts the metric-name dimension to
/// the three configured aliases, so only Web Vitals events reach the
/// aggregation pass. Any user filters from the options are parsed and
/// appended after it; the clauses combine with AND.
///
/// # Errors
/// `FilterError` when the options carry a malformed filter expression.
pub fn build_report_request(
    opts: &ViewOpts,
    params: &ReportParams,
) -> Result<ReportRequest, FilterError> {
    let mut filters = vec![DimensionFilter {
        dimension_name: opts.metric_name_dim.clone(),
        operator: FilterOperator::InList,
        expressions: vec![
            opts.lcp_name.clone(),
            opts.fid_name.clone(),
            opts.cls_name.clone(),
        ],
        not: false,
    }];

    if !opts.filters.is_empty() {
        filters.extend(parse_filters(&opts.filters)?);
    }

    Ok(ReportRequest {
        view_id: params.view_id.clone(),
        page_size: REPORT_PAGE_SIZE,
        include_empty_rows: true,
        date_ranges: vec![DateRange {
            start_date: params.start_date.format("%Y-%m-%d").to_string(),
            end_date: params.end_date.format("%Y-%m-%d").to_string(),
        }],
        segments: vec![
            SegmentRef {
                segment_id: format!("{}{}", SEGMENT_ID_PREFIX, params.segment_a),
            },
            SegmentRef {
                segment_id: format!("{}{}", SEGMENT_ID_PREFIX, params.segment_b),
            },
        ],
        metrics: vec![MetricRef {
            expression: EVENT_VALUE_METRIC.to_string(),
        }],
        dimensions: vec![
            DimensionRef {
                name: SEGMENT_DIM.to_string(),
            },
            DimensionRef {
                name: DATE_DIM.to_string(),
            },
            // Metric name (ga:eventAction unless remapped)
            DimensionRef {
                name: opts.metric_name_dim.clone(),
            },
            DimensionRef {
                name: COUNTRY_DIM.to_string(),
            },
            DimensionRef {
                name: PAGE_DIM.to_string(),
            },
            // Unique metric id (ga:eventLabel unless remapped)
            DimensionRef {
                name: opts.metric_id_dim.clone(),
            },
        ],
        dimension_filter_clauses: DimensionFilterClauses {
            operator: FilterCombinator::And,
            filters,
        },
        order_bys: vec![
            OrderBy {
                field_name: EVENT_VALUE_METRIC.to_string(),
                sort_order: SortOrder::Ascending,
            },
            OrderBy {
                field_name: DATE_DIM.to_string(),
                sort_order: SortOrder::Ascending,
            },
        ],
    })
}
