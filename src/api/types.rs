//! Wire types for the Analytics Reporting and Management APIs.
//!
//! Response shapes follow the Reporting API v4 `reports:batchGet`
//! schema and the Management API v3 segment list.

use crate::request::schema::ReportRequest;
use crate::utils::config::REPORT_DIMENSIONS;
use crate::utils::error::ApiError;
use serde::{Deserialize, Serialize};

/// Body POSTed to `reports:batchGet`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetRequest<'a> {
    pub report_requests: Vec<&'a ReportRequest>,
}

/// Response envelope from `reports:batchGet`
#[derive(Debug, Clone, Deserialize)]
pub struct BatchGetResponse {
    #[serde(default)]
    pub reports: Vec<Report>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub data: ReportData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    /// Absent entirely when the report matched nothing
    #[serde(default)]
    pub rows: Vec<ReportRow>,

    #[serde(default)]
    pub row_count: u64,
}

/// One row as returned by the Reporting API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub dimensions: Vec<String>,
    pub metrics: Vec<DateRangeValues>,
}

/// Metric values for one date range, as strings on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRangeValues {
    pub values: Vec<String>,
}

/// Error body the Analytics APIs return on failure
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: i64,

    #[serde(default)]
    pub message: String,
}

/// Segment metadata from the Management API
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentList {
    #[serde(default)]
    pub items: Vec<SegmentInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SegmentInfo {
    pub id: String,
    pub name: String,
}

/// One parsed metric observation.
///
/// Field order mirrors the report's fixed dimension order: segment,
/// date, metric label, country, page path. The sixth dimension (the
/// metric id) keeps observations granular on the wire but is not
/// carried into the parsed row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub segment_id: String,
    pub date: String,

    /// Raw metric-name label, before alias mapping
    pub metric: String,

    pub country: String,
    pub page: String,
    pub value: f64,
}

impl Row {
    /// Parse a wire row into a typed observation.
    ///
    /// # Errors
    /// `ApiError::InvalidResponse` when dimensions are missing or the
    /// metric value is not numeric.
    pub fn from_report_row(raw: &ReportRow) -> Result<Row, ApiError> {
        if raw.dimensions.len() < REPORT_DIMENSIONS {
            return Err(ApiError::InvalidResponse(format!(
                "expected {} dimensions, got {}",
                REPORT_DIMENSIONS,
                raw.dimensions.len()
            )));
        }

        let value_str = raw
            .metrics
            .first()
            .and_then(|metric| metric.values.first())
            .ok_or_else(|| ApiError::InvalidResponse("row has no metric value".to_string()))?;

        let value = value_str.parse::<f64>().map_err(|_| {
            ApiError::InvalidResponse(format!("non-numeric metric value '{}'", value_str))
        })?;

        Ok(Row {
            segment_id: raw.dimensions[0].clone(),
            date: raw.dimensions[1].clone(),
            metric: raw.dimensions[2].clone(),
            country: raw.dimensions[3].clone(),
            page: raw.dimensions[4].clone(),
            value,
        })
    }
}
