//! Filter predicates.
//!
//! A [`Predicate`] pairs a field name with the value it should contain. A
//! [`FilterSpec`] is a disjunction of predicates: a record is kept when at
//! least one predicate matches it.

use std::collections::HashMap;

use crate::pattern::Pattern;
use crate::value::Value;

/// A single filter predicate: `field` must contain `value`.
///
/// # Example
///
/// ```
/// use sifter::{Predicate, Value};
///
/// let predicate = Predicate::new("appVersion", "1.2.*");
/// assert_eq!(predicate.field, "appVersion");
/// assert_eq!(predicate.value, Value::text("1.2.*"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// The field name to test.
    pub field: String,
    /// The value the field must contain.
    pub value: Value<'static>,
}

impl Predicate {
    /// Creates a new predicate.
    pub fn new<'v>(field: impl Into<String>, value: impl Into<Value<'v>>) -> Self {
        Predicate {
            field: field.into(),
            value: value.into().into_owned(),
        }
    }
}

/// Disjunction of predicates. An empty filter keeps every record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    predicates: Vec<Predicate>,
}

/// The empty filter: every record is kept.
pub const NO_FILTER: FilterSpec = FilterSpec {
    predicates: Vec::new(),
};

impl FilterSpec {
    /// Creates a filter from a list of predicates.
    pub fn new(predicates: Vec<Predicate>) -> Self {
        FilterSpec { predicates }
    }

    /// Adds a predicate.
    pub fn push(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }

    /// Returns the predicates.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns `true` if there are no predicates.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Returns the number of predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Prepares the predicates for evaluation against many records.
    ///
    /// Wildcard needles are compiled once here, one [`Pattern`] per distinct
    /// needle.
    pub fn matcher(&self) -> Matcher<'_> {
        let mut compiled: HashMap<&str, Pattern> = HashMap::new();
        let needles = self
            .predicates
            .iter()
            .map(|predicate| {
                let needle = match &predicate.value {
                    Value::Text(raw) => Needle::Text {
                        pattern: compiled
                            .entry(raw.as_ref())
                            .or_insert_with(|| Pattern::new(raw))
                            .clone(),
                        raw: raw.as_ref(),
                    },
                    typed => Needle::Typed(typed),
                };
                (predicate.field.as_str(), needle)
            })
            .collect();
        Matcher { needles }
    }
}

impl From<Vec<Predicate>> for FilterSpec {
    fn from(predicates: Vec<Predicate>) -> Self {
        FilterSpec::new(predicates)
    }
}

impl FromIterator<Predicate> for FilterSpec {
    fn from_iter<I: IntoIterator<Item = Predicate>>(iter: I) -> Self {
        FilterSpec::new(iter.into_iter().collect())
    }
}

#[derive(Debug)]
enum Needle<'q> {
    /// Text as typed by the user. Matched as a pattern against text fields
    /// and read as the field's own kind otherwise.
    Text { pattern: Pattern, raw: &'q str },
    Typed(&'q Value<'static>),
}

impl Needle<'_> {
    fn matches(&self, field: &Value<'_>) -> bool {
        match (self, field) {
            (Needle::Text { pattern, .. }, Value::Text(haystack)) => pattern.matches(haystack),
            (Needle::Text { raw, .. }, other) => other
                .kind()
                .parse(raw)
                .is_some_and(|needle| other.contains(&needle)),
            (Needle::Typed(needle), other) => other.contains(needle),
        }
    }
}

/// A [`FilterSpec`] compiled for evaluation.
#[derive(Debug)]
pub struct Matcher<'q> {
    needles: Vec<(&'q str, Needle<'q>)>,
}

impl Matcher<'_> {
    /// Tests a record.
    ///
    /// Predicates whose field the record does not have are skipped. The
    /// record matches if any remaining predicate matches; with no predicates
    /// at all, every record matches.
    pub fn matches<T, F>(&self, record: &T, accessor: &F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Option<Value<'a>>,
    {
        if self.needles.is_empty() {
            return true;
        }
        self.needles.iter().any(|(field, needle)| {
            accessor(record, *field).is_some_and(|value| needle.matches(&value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    struct Item {
        name: &'static str,
        id: i64,
    }

    fn accessor<'a>(item: &'a Item, field: &str) -> Option<Value<'a>> {
        match field {
            "name" => Some(Value::text(item.name)),
            "id" => Some(Value::int(item.id)),
            _ => None,
        }
    }

    fn spec(predicates: &[(&str, &str)]) -> FilterSpec {
        predicates
            .iter()
            .map(|(field, value)| Predicate::new(*field, *value))
            .collect()
    }

    #[test]
    fn predicate_owns_its_value() {
        let raw = String::from("ab");
        let predicate = Predicate::new("name", raw.as_str());
        drop(raw);
        assert_eq!(predicate.value, Value::text("ab"));
    }

    #[test]
    fn empty_spec_matches_everything() {
        let item = Item { name: "x", id: 1 };
        assert!(NO_FILTER.is_empty());
        assert!(NO_FILTER.matcher().matches(&item, &accessor));
    }

    #[test]
    fn single_predicate() {
        let matcher_spec = spec(&[("name", "Ab")]);
        let matcher = matcher_spec.matcher();
        assert!(matcher.matches(&Item { name: "ab", id: 1 }, &accessor));
        assert!(!matcher.matches(&Item { name: "ac", id: 1 }, &accessor));
    }

    #[test]
    fn predicates_are_disjunctive() {
        let matcher_spec = spec(&[("name", "ab*"), ("name", "da*")]);
        let matcher = matcher_spec.matcher();
        assert!(matcher.matches(&Item { name: "ab", id: 1 }, &accessor));
        assert!(matcher.matches(&Item { name: "da", id: 8 }, &accessor));
        assert!(!matcher.matches(&Item { name: "ba", id: 7 }, &accessor));
    }

    #[test]
    fn unknown_field_is_skipped() {
        let matcher_spec = spec(&[("nope", "x"), ("name", "ab")]);
        let matcher = matcher_spec.matcher();
        assert!(matcher.matches(&Item { name: "ab", id: 1 }, &accessor));

        let only_unknown = spec(&[("nope", "x")]);
        assert!(!only_unknown.matcher().matches(&Item { name: "ab", id: 1 }, &accessor));
    }

    #[test]
    fn text_needle_is_read_as_field_kind() {
        let matcher_spec = spec(&[("id", "8")]);
        let matcher = matcher_spec.matcher();
        assert!(matcher.matches(&Item { name: "da", id: 8 }, &accessor));
        assert!(!matcher.matches(&Item { name: "ab", id: 1 }, &accessor));

        let unparsable = spec(&[("id", "eight")]);
        assert!(!unparsable.matcher().matches(&Item { name: "da", id: 8 }, &accessor));
    }

    #[test]
    fn typed_needles() {
        let by_id = FilterSpec::new(vec![Predicate::new("id", 3i64)]);
        assert!(by_id.matcher().matches(&Item { name: "ab", id: 3 }, &accessor));
        assert!(!by_id.matcher().matches(&Item { name: "ab", id: 4 }, &accessor));

        let at = Utc.timestamp_opt(0, 0).unwrap();
        let wrong_kind = FilterSpec::new(vec![Predicate::new("id", at)]);
        assert!(!wrong_kind.matcher().matches(&Item { name: "ab", id: 0 }, &accessor));
    }

    #[test]
    fn duplicate_needles_share_a_pattern() {
        let duplicated = spec(&[("name", "a*"), ("id", "a*"), ("name", "A*")]);
        let matcher = duplicated.matcher();
        assert_eq!(matcher.needles.len(), 3);
        assert!(matcher.matches(&Item { name: "abc", id: 1 }, &accessor));
    }
}
