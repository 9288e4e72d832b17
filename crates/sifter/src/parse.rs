//! Parsers for the `orderBy` and `filter` list parameters.
//!
//! ```text
//! orderBy := key ("," key)*
//! key     := field [ws ("asc" | "desc")]      direction is case-insensitive
//! filter  := ['"'] expr (" OR " expr)* ['"']
//! expr    := field "=" pattern
//! ```
//!
//! Both parsers return an empty sort or filter for empty input and fail on
//! the first malformed segment.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::clause::{FilterSpec, Predicate, NO_FILTER};
use crate::error::{Result, SelectError};
use crate::ordering::{Dir, OrderBy, SortSpec, NO_SORT};
use crate::value::Value;

/// Separator between filter sub-expressions. A value containing it cannot
/// be expressed.
const OR_SEPARATOR: &str = " OR ";

static FILTER_EXPRESSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^=]+)[ \t]*=[ \t]*(.+)").unwrap());

/// Parses an `orderBy` parameter such as `"name asc, id desc"`.
///
/// A key without a direction sorts ascending.
///
/// ```
/// use sifter::{parse_order_by, OrderBy};
///
/// let spec = parse_order_by("name, createTime DESC").unwrap();
/// assert_eq!(spec.keys(), &[OrderBy::asc("name"), OrderBy::desc("createTime")]);
///
/// assert!(parse_order_by("name sideways").is_err());
/// assert!(parse_order_by("").unwrap().is_empty());
/// ```
pub fn parse_order_by(input: &str) -> Result<SortSpec> {
    if input.is_empty() {
        return Ok(NO_SORT);
    }

    input.split(',').map(parse_order_key).collect()
}

fn parse_order_key(segment: &str) -> Result<OrderBy> {
    let tokens: Vec<&str> = segment.split_whitespace().collect();
    match tokens.as_slice() {
        [field] => Ok(OrderBy::asc(*field)),
        [field, direction] => {
            let dir = direction
                .to_lowercase()
                .parse::<Dir>()
                .map_err(|_| SelectError::InvalidDirection {
                    direction: direction.to_string(),
                })?;
            Ok(OrderBy::new(*field, dir))
        }
        _ => Err(SelectError::InvalidOrderBy {
            segment: segment.to_string(),
        }),
    }
}

/// Parses a `filter` parameter such as `"name=ab* OR appVersion=1.2"`.
///
/// The whole input may be wrapped in double quotes. Field names are kept as
/// written; values become case-insensitive text.
///
/// ```
/// use sifter::{parse_filter, Value};
///
/// let spec = parse_filter("\"name=web* OR status=running\"").unwrap();
/// assert_eq!(spec.len(), 2);
/// assert_eq!(spec.predicates()[1].field, "status");
/// assert_eq!(spec.predicates()[1].value, Value::text("running"));
///
/// assert!(parse_filter("name").is_err());
/// ```
pub fn parse_filter(input: &str) -> Result<FilterSpec> {
    if input.is_empty() {
        return Ok(NO_FILTER);
    }

    let body = strip_quotes(input);
    body.split(OR_SEPARATOR).map(parse_filter_expression).collect()
}

fn strip_quotes(input: &str) -> &str {
    if input.len() >= 2 {
        if let Some(inner) = input.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
            return inner;
        }
    }
    input
}

fn parse_filter_expression(expression: &str) -> Result<Predicate> {
    let invalid = || SelectError::InvalidFilter {
        expression: expression.to_string(),
    };
    let captures = FILTER_EXPRESSION.captures(expression).ok_or_else(invalid)?;
    let (Some(field), Some(value)) = (captures.get(1), captures.get(2)) else {
        return Err(invalid());
    };
    Ok(Predicate::new(
        field.as_str().trim(),
        Value::text(value.as_str().trim()),
    ))
}
