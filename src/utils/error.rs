//! Error types for the entire crate.
//!
//! We use `thiserror` for library-style errors with custom types, one enum
//! per concern. Callers that don't need to distinguish the concern can hold
//! a [`VitalsError`].

use thiserror::Error;

/// Errors raised while parsing a filter expression
#[derive(Error, Debug)]
pub enum FilterError {
    #[error(
        "OR based filter expressions (using a comma) are not supported. \
         Only AND based filter expressions (using a semicolon) are allowed."
    )]
    CommaNotSupported,

    #[error("Invalid filter expression '{0}'")]
    InvalidExpression(String),
}

/// Errors that can occur talking to the Analytics APIs
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Access to the Analytics API was rejected: {0}")]
    AuthRejected(String),

    #[error("Analytics API error {code}: {message}")]
    ApiFailure { code: i64, message: String },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Errors raised while aggregating report rows
#[derive(Error, Debug)]
pub enum AggregateError {
    /// The report came back empty. Expected for properties that have
    /// never sent Web Vitals events; carries user-facing text.
    #[error("{title} {message}")]
    NoData { title: String, message: String },

    /// A row's metric label did not map to LCP, FID or CLS after alias
    /// mapping. Usually the "(other)" bucket Google Analytics emits once
    /// a report exceeds its row cap, which would silently skew every
    /// breakdown, so the whole run aborts.
    #[error("unexpected metric '{0}' found")]
    UnexpectedMetric(String),
}

impl AggregateError {
    /// The canonical empty-report error
    pub fn no_data() -> Self {
        AggregateError::NoData {
            title: "No Web Vitals events found...".to_string(),
            message: [
                "It looks like no Web Vitals data has been sent to this Google",
                "Analytics account. You can learn how to measure and send Web Vitals",
                "data here: https://github.com/GoogleChrome/web-vitals",
            ]
            .join(" "),
        }
    }
}

/// Any failure a full report run can produce
#[derive(Error, Debug)]
pub enum VitalsError {
    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}
