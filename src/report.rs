//! End-to-end report runs.
//!
//! A full run:
//! 1. Resolves the effective per-view options
//! 2. Builds the report request
//! 3. Fetches the rows (the only I/O boundary, awaited to completion
//!    before aggregation begins)
//! 4. Aggregates the rows into the summary

use crate::aggregator::{aggregate_report, VitalsSummary};
use crate::api::{ReportFetcher, SegmentNames};
use crate::request::{build_report_request, ReportParams};
use crate::utils::config::ViewOpts;
use crate::utils::error::VitalsError;
use log::{debug, info};

/// Run a full Web Vitals report and return its summary.
///
/// `opts` may be omitted (or inactive), in which case the default event
/// layout is assumed.
///
/// # Errors
/// Propagates the first failure from any stage: a malformed filter
/// expression, a transport/auth failure from the fetcher, an empty
/// report, or an unexpected metric label in a row.
pub fn get_web_vitals_summary(
    fetcher: &dyn ReportFetcher,
    names: &dyn SegmentNames,
    opts: Option<&ViewOpts>,
    params: &ReportParams,
) -> Result<VitalsSummary, VitalsError> {
    let opts = ViewOpts::effective(opts);

    let request = build_report_request(&opts, params)?;
    debug!("Built report request for view {}", request.view_id);

    let rows = fetcher.fetch_report(&request)?;
    info!("Fetched {} rows for view {}", rows.len(), request.view_id);

    let summary = aggregate_report(&request, &opts, &rows, names)?;

    Ok(summary)
}
