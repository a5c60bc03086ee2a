//! Filter expression parsing.
//!
//! Callers can narrow a report with Analytics filter expressions of the
//! form `<dimension><comparator><value>`, combined with semicolons
//! (AND). Comma-based OR combinations are not part of the supported
//! grammar and are rejected up front.

use crate::utils::error::FilterError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// A comma not preceded by a backslash, including one at the start.
static UNESCAPED_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|[^\\]),").expect("comma pattern"));

// Dimension name, comparator, value. Anchored: a piece matches wholly
// or not at all.
static FILTER_EXPRESSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(ga:\w+)([!=][=@~])(.+)$").expect("filter grammar"));

/// How a filter clause compares its dimension against the expressions.
///
/// Variants serialize to the Reporting API's literal operator values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterOperator {
    /// Membership in the expression list
    InList,
    /// Exact string match
    Exact,
    /// Substring match
    Partial,
    /// Regular expression match
    Regexp,
}

/// A single dimension filter clause, in the Reporting API's shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionFilter {
    pub dimension_name: String,
    pub operator: FilterOperator,
    pub expressions: Vec<String>,

    /// Negates the match. Omitted on the wire when false.
    #[serde(default, skip_serializing_if = "is_false")]
    pub not: bool,
}

fn is_false(not: &bool) -> bool {
    !*not
}

/// Parse a semicolon-separated filter expression into ordered clauses.
///
/// # Errors
/// * `FilterError::CommaNotSupported` - the expression uses comma-OR syntax
/// * `FilterError::InvalidExpression` - a piece does not match the grammar
pub fn parse_filters(expression: &str) -> Result<Vec<DimensionFilter>, FilterError> {
    if UNESCAPED_COMMA.is_match(expression) {
        return Err(FilterError::CommaNotSupported);
    }

    // TODO: add support for escaping semicolons, so a literal semicolon
    // can appear inside a filter value.
    expression.split(';').map(parse_expression).collect()
}

/// Parse one `<dimension><comparator><value>` piece
fn parse_expression(piece: &str) -> Result<DimensionFilter, FilterError> {
    let captures = FILTER_EXPRESSION
        .captures(piece)
        .ok_or_else(|| FilterError::InvalidExpression(piece.to_string()))?;

    let comparator = &captures[2];

    // The trailing comparator character selects the operator.
    let operator = match comparator.chars().last() {
        Some('=') => FilterOperator::Exact,
        Some('@') => FilterOperator::Partial,
        Some('~') => FilterOperator::Regexp,
        _ => return Err(FilterError::InvalidExpression(piece.to_string())),
    };

    Ok(DimensionFilter {
        dimension_name: captures[1].to_string(),
        operator,
        expressions: vec![captures[3].to_string()],
        not: comparator.starts_with('!'),
    })
}
