//! HTTP client for the Google Analytics reporting APIs.

use super::types::{ApiErrorBody, BatchGetRequest, BatchGetResponse, Row, SegmentInfo, SegmentList};
use crate::request::schema::ReportRequest;
use crate::utils::config::{DEFAULT_HTTP_TIMEOUT, REPORTING_ENDPOINT, SEGMENTS_ENDPOINT};
use crate::utils::error::ApiError;
use log::{debug, info};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;

/// Executes report requests against a remote reporting service.
///
/// The aggregation engine never talks to the network itself; it
/// consumes whatever row sequence an implementation returns.
pub trait ReportFetcher {
    /// Run the request and return its rows, in report order
    fn fetch_report(&self, request: &ReportRequest) -> Result<Vec<Row>, ApiError>;
}

/// Client for the Reporting API v4 and Management API v3
pub struct GaApiClient {
    client: Client,
    access_token: String,
    reporting_endpoint: String,
    segments_endpoint: String,
}

impl GaApiClient {
    /// Create a client holding an OAuth access token
    pub fn new(access_token: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(ApiError::RequestFailed)?;

        Ok(Self {
            client,
            access_token: access_token.into(),
            reporting_endpoint: REPORTING_ENDPOINT.to_string(),
            segments_endpoint: SEGMENTS_ENDPOINT.to_string(),
        })
    }

    /// List the segments visible to the authorized user.
    ///
    /// Feeds the id → display-name table used when aggregating.
    pub fn list_segments(&self) -> Result<Vec<SegmentInfo>, ApiError> {
        debug!("Fetching segment list");

        let response = self
            .client
            .get(&self.segments_endpoint)
            .bearer_auth(&self.access_token)
            .send()
            .map_err(ApiError::RequestFailed)?;

        let response = check_status(response)?;
        let list: SegmentList = response.json().map_err(ApiError::RequestFailed)?;

        debug!("Fetched {} segments", list.items.len());

        Ok(list.items)
    }
}

impl ReportFetcher for GaApiClient {
    fn fetch_report(&self, request: &ReportRequest) -> Result<Vec<Row>, ApiError> {
        info!("Fetching report for view: {}", request.view_id);

        let body = BatchGetRequest {
            report_requests: vec![request],
        };

        let response = self
            .client
            .post(&self.reporting_endpoint)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .map_err(ApiError::RequestFailed)?;

        let response = check_status(response)?;
        let batch: BatchGetResponse = response.json().map_err(ApiError::RequestFailed)?;

        let report = batch.reports.into_iter().next().ok_or_else(|| {
            ApiError::InvalidResponse("response contains no reports".to_string())
        })?;

        let rows = report
            .data
            .rows
            .iter()
            .map(Row::from_report_row)
            .collect::<Result<Vec<Row>, ApiError>>()?;

        debug!("Fetched {} report rows", rows.len());

        Ok(rows)
    }
}

/// Map a non-success HTTP response to a typed error
fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let (code, message) = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => (parsed.error.code, parsed.error.message),
        Err(_) => (i64::from(status.as_u16()), body),
    };

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::AuthRejected(message));
    }

    Err(ApiError::ApiFailure { code, message })
}
