//! Communication with the Google Analytics APIs.
//!
//! The aggregation engine depends only on the [`ReportFetcher`] and
//! [`SegmentNames`] contracts; [`GaApiClient`] and [`SegmentNameTable`]
//! are the production implementations backed by the Reporting API v4
//! and the Management API v3.

pub mod client;
pub mod segments;
pub mod types;

// Re-export main types
pub use client::{GaApiClient, ReportFetcher};
pub use segments::{SegmentNameTable, SegmentNames};
pub use types::{DateRangeValues, ReportRow, Row, SegmentInfo};
