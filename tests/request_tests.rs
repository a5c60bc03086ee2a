use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use vitals_report::filters::FilterOperator;
use vitals_report::request::{build_report_request, ReportParams};
use vitals_report::utils::config::ViewOpts;
use vitals_report::utils::error::FilterError;

fn params() -> ReportParams {
    ReportParams {
        view_id: "123456".to_string(),
        start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2020, 1, 31).unwrap(),
        segment_a: "-15".to_string(),
        segment_b: "-16".to_string(),
    }
}

#[test]
fn test_request_matches_the_service_schema_exactly() -> anyhow::Result<()> {
    let request = build_report_request(&ViewOpts::default(), &params())?;
    let actual = serde_json::to_value(&request)?;

    let expected = json!({
        "viewId": "123456",
        "pageSize": 100_000,
        "includeEmptyRows": true,
        "dateRanges": [{"startDate": "2020-01-01", "endDate": "2020-01-31"}],
        "segments": [
            {"segmentId": "gaid::-15"},
            {"segmentId": "gaid::-16"},
        ],
        "metrics": [{"expression": "ga:eventValue"}],
        "dimensions": [
            {"name": "ga:segment"},
            {"name": "ga:date"},
            {"name": "ga:eventAction"},
            {"name": "ga:country"},
            {"name": "ga:pagePath"},
            {"name": "ga:eventLabel"},
        ],
        "dimensionFilterClauses": {
            "operator": "AND",
            "filters": [{
                "dimensionName": "ga:eventAction",
                "operator": "IN_LIST",
                "expressions": ["LCP", "FID", "CLS"],
            }],
        },
        "orderBys": [
            {"fieldName": "ga:eventValue", "sortOrder": "ASCENDING"},
            {"fieldName": "ga:date", "sortOrder": "ASCENDING"},
        ],
    });

    assert_eq!(actual, expected);
    Ok(())
}

#[test]
fn test_user_filters_append_after_the_mandatory_clause() -> anyhow::Result<()> {
    let opts = ViewOpts {
        active: true,
        filters: "ga:country==US;ga:pagePath=@/blog".to_string(),
        ..ViewOpts::default()
    };

    let request = build_report_request(&opts, &params())?;
    let clauses = &request.dimension_filter_clauses.filters;

    assert_eq!(clauses.len(), 3);
    assert_eq!(clauses[0].operator, FilterOperator::InList);
    assert_eq!(clauses[1].dimension_name, "ga:country");
    assert_eq!(clauses[2].dimension_name, "ga:pagePath");
    assert_eq!(clauses[2].operator, FilterOperator::Partial);
    Ok(())
}

#[test]
fn test_custom_options_rebind_dimensions_and_aliases() -> anyhow::Result<()> {
    let opts = ViewOpts {
        active: true,
        metric_name_dim: "ga:dimension1".to_string(),
        metric_id_dim: "ga:dimension2".to_string(),
        lcp_name: "largest_contentful_paint".to_string(),
        fid_name: "first_input_delay".to_string(),
        cls_name: "cumulative_layout_shift".to_string(),
        ..ViewOpts::default()
    };

    let request = build_report_request(&opts, &params())?;

    assert_eq!(request.dimensions[2].name, "ga:dimension1");
    assert_eq!(request.dimensions[5].name, "ga:dimension2");

    let mandatory = &request.dimension_filter_clauses.filters[0];
    assert_eq!(mandatory.dimension_name, "ga:dimension1");
    assert_eq!(
        mandatory.expressions,
        vec![
            "largest_contentful_paint".to_string(),
            "first_input_delay".to_string(),
            "cumulative_layout_shift".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_malformed_filter_fails_the_build() {
    let opts = ViewOpts {
        active: true,
        filters: "ga:x==1,ga:y==2".to_string(),
        ..ViewOpts::default()
    };

    let err = build_report_request(&opts, &params()).unwrap_err();
    assert!(matches!(err, FilterError::CommaNotSupported));
}
