use vitals_report::api::{
    DateRangeValues, ReportRow, Row, SegmentInfo, SegmentNameTable, SegmentNames,
};
use vitals_report::utils::error::ApiError;

fn wire_row(values: Vec<&str>) -> ReportRow {
    ReportRow {
        dimensions: vec![
            "-15".to_string(),
            "20200115".to_string(),
            "CLS".to_string(),
            "Germany".to_string(),
            "/checkout".to_string(),
            "v1-1579046400000-42".to_string(),
        ],
        metrics: vec![DateRangeValues {
            values: values.into_iter().map(String::from).collect(),
        }],
    }
}

#[test]
fn test_wire_row_converts_to_typed_row() {
    let row = Row::from_report_row(&wire_row(vec!["142"])).unwrap();

    assert_eq!(row.segment_id, "-15");
    assert_eq!(row.date, "20200115");
    assert_eq!(row.metric, "CLS");
    assert_eq!(row.country, "Germany");
    assert_eq!(row.page, "/checkout");
    assert_eq!(row.value, 142.0);
}

#[test]
fn test_wire_row_deserializes_from_response_json() {
    let raw: ReportRow = serde_json::from_value(serde_json::json!({
        "dimensions": ["-15", "20200115", "LCP", "Germany", "/checkout", "v1-42"],
        "metrics": [{"values": ["2389"]}],
    }))
    .unwrap();

    let row = Row::from_report_row(&raw).unwrap();
    assert_eq!(row.metric, "LCP");
    assert_eq!(row.value, 2389.0);
}

#[test]
fn test_non_numeric_metric_value_is_rejected() {
    let err = Row::from_report_row(&wire_row(vec!["n/a"])).unwrap_err();

    assert!(matches!(err, ApiError::InvalidResponse(_)));
    assert!(err.to_string().contains("n/a"));
}

#[test]
fn test_row_without_metric_values_is_rejected() {
    let err = Row::from_report_row(&wire_row(vec![])).unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[test]
fn test_segment_table_builds_from_management_list() {
    let segments = vec![
        SegmentInfo {
            id: "-15".to_string(),
            name: "Desktop Traffic".to_string(),
        },
        SegmentInfo {
            id: "-16".to_string(),
            name: "Mobile Traffic".to_string(),
        },
    ];

    let table = SegmentNameTable::from_segments(&segments);
    assert_eq!(table.segment_name("-15"), "Desktop Traffic");
    assert_eq!(table.segment_name("-16"), "Mobile Traffic");
}

#[test]
fn test_segment_table_resolves_and_falls_back() {
    let mut table = SegmentNameTable::new();
    table.insert("-15", "Desktop Traffic");
    table.insert("-16", "Mobile Traffic");

    assert_eq!(table.segment_name("-16"), "Mobile Traffic");
    assert_eq!(table.segment_name("gaid::-1"), "gaid::-1");
}
