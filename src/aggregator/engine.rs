//! The aggregation pass: report rows in, nested summary out.
//!
//! A single synchronous walk over the fetched rows. Each row lands in
//! the metric's flat value sequence plus four breakdowns (segment,
//! date, page, country), with every nested container created lazily on
//! first use. Pages and countries are ranked by observation count at
//! the end of the pass.

use super::summary::{DimensionBucket, Metric, MetricMap, MetricSummary, SegmentSeries, VitalsSummary};
use crate::api::{Row, SegmentNames};
use crate::request::schema::ReportRequest;
use crate::utils::config::{ViewOpts, CLS_SCALE_FACTOR, SEGMENT_ID_PREFIX};
use crate::utils::error::AggregateError;
use indexmap::IndexMap;
use log::debug;
use std::collections::HashMap;

/// Aggregate a report's rows into the nested summary.
///
/// # Arguments
/// * `request` - the descriptor the rows were fetched with; supplies
///   the two segment ids
/// * `opts` - the options the request was built from; supplies the
///   metric alias table
/// * `rows` - fetched rows, in report order
/// * `names` - segment id → display name resolver
///
/// # Errors
/// * `AggregateError::NoData` - the row sequence is empty
/// * `AggregateError::UnexpectedMetric` - a row's metric label is not
///   one of the configured aliases
pub fn aggregate_report(
    request: &ReportRequest,
    opts: &ViewOpts,
    rows: &[Row],
    names: &dyn SegmentNames,
) -> Result<VitalsSummary, AggregateError> {
    if rows.is_empty() {
        return Err(AggregateError::no_data());
    }

    debug!("Aggregating {} report rows", rows.len());

    // Convert custom metric labels back to the canonical names.
    let alias_map: HashMap<&str, Metric> = HashMap::from([
        (opts.lcp_name.as_str(), Metric::Lcp),
        (opts.fid_name.as_str(), Metric::Fid),
        (opts.cls_name.as_str(), Metric::Cls),
    ]);

    // Resolve both segment names once per run. Every lazily-created
    // segment breakdown starts from this template.
    let segment_names: Vec<String> = request
        .segments
        .iter()
        .map(|segment| {
            let id = segment
                .segment_id
                .strip_prefix(SEGMENT_ID_PREFIX)
                .unwrap_or(&segment.segment_id);
            names.segment_name(id)
        })
        .collect();

    let segment_template = || -> SegmentSeries {
        segment_names
            .iter()
            .map(|name| (name.clone(), Vec::new()))
            .collect()
    };

    let mut summary = VitalsSummary {
        metrics: MetricMap::build(|| MetricSummary {
            values: Vec::new(),
            segments: segment_template(),
            dates: IndexMap::new(),
        }),
        countries: IndexMap::new(),
        pages: IndexMap::new(),
    };

    for row in rows {
        let segment = names.segment_name(&row.segment_id);

        let metric = *alias_map
            .get(row.metric.as_str())
            .ok_or_else(|| AggregateError::UnexpectedMetric(row.metric.clone()))?;

        // CLS is stored at 1000x so it survives the integer event value.
        let value = if metric == Metric::Cls {
            row.value / CLS_SCALE_FACTOR
        } else {
            row.value
        };

        let metric_summary = summary.metrics.get_mut(metric);
        metric_summary.values.push(value);

        // Breakdown by segment.
        metric_summary
            .segments
            .entry(segment.clone())
            .or_default()
            .push(value);

        // Breakdown by date.
        metric_summary
            .dates
            .entry(row.date.clone())
            .or_insert_with(segment_template)
            .entry(segment.clone())
            .or_default()
            .push(value);

        // Breakdown by page.
        let page_bucket = summary
            .pages
            .entry(row.page.clone())
            .or_insert_with(|| DimensionBucket::new(segment_template));
        page_bucket
            .metrics
            .get_mut(metric)
            .entry(segment.clone())
            .or_default()
            .push(value);
        page_bucket.count += 1;

        // Breakdown by country.
        let country_bucket = summary
            .countries
            .entry(row.country.clone())
            .or_insert_with(|| DimensionBucket::new(segment_template));
        country_bucket
            .metrics
            .get_mut(metric)
            .entry(segment)
            .or_default()
            .push(value);
        country_bucket.count += 1;
    }

    // Rank pages and countries by observation count. The sort is
    // stable, so equal counts keep first-seen order.
    summary.pages.sort_by(|_, a, _, b| b.count.cmp(&a.count));
    summary.countries.sort_by(|_, a, _, b| b.count.cmp(&a.count));

    debug!(
        "Aggregated {} pages and {} countries",
        summary.pages.len(),
        summary.countries.len()
    );

    Ok(summary)
}
