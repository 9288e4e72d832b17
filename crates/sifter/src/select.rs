//! The pipeline executor.
//!
//! A [`Selector`] holds borrowed records and runs the stages of a [`Query`]
//! over them: [`filter`](Selector::filter), [`sort`](Selector::sort) and
//! [`paginate`](Selector::paginate). Stages chain in any order, each working
//! on what the previous one left. List endpoints use filter, then sort, then
//! paginate, which is what [`Selector::run`] does.
//!
//! No stage fails. Unknown fields are skipped by the filter and make the sort
//! a no-op.

use std::fmt;

use tracing::{debug, trace};

use crate::ordering::compare_rows;
use crate::query::Query;
use crate::value::Value;

/// Runs a query's stages over a list of borrowed records.
///
/// # Example
///
/// ```
/// use sifter::{parse_filter, parse_order_by, Query, Selector, Value};
///
/// struct Node {
///     name: &'static str,
///     pods: i64,
/// }
///
/// fn accessor<'a>(node: &'a Node, field: &str) -> Option<Value<'a>> {
///     match field {
///         "name" => Some(Value::text(node.name)),
///         "pods" => Some(Value::int(node.pods)),
///         _ => None,
///     }
/// }
///
/// let nodes = [
///     Node { name: "edge-1", pods: 4 },
///     Node { name: "core-1", pods: 9 },
///     Node { name: "edge-2", pods: 7 },
/// ];
/// let query = Query::new()
///     .with_filter(parse_filter("name=edge*").unwrap())
///     .with_sort(parse_order_by("pods desc").unwrap())
///     .build();
///
/// let names: Vec<_> = Selector::new(&nodes, &query, accessor)
///     .filter()
///     .sort()
///     .paginate()
///     .into_records()
///     .into_iter()
///     .map(|node| node.name)
///     .collect();
/// assert_eq!(names, ["edge-2", "edge-1"]);
/// ```
pub struct Selector<'r, 'q, T, F> {
    records: Vec<&'r T>,
    query: &'q Query,
    accessor: F,
}

impl<'r, 'q, T, F> Selector<'r, 'q, T, F>
where
    for<'a> F: Fn(&'a T, &str) -> Option<Value<'a>>,
{
    /// Creates a selector over every record in `records`.
    pub fn new(records: &'r [T], query: &'q Query, accessor: F) -> Self {
        Self::from_refs(records.iter().collect(), query, accessor)
    }

    /// Creates a selector over an already collected list of references.
    pub fn from_refs(records: Vec<&'r T>, query: &'q Query, accessor: F) -> Self {
        Selector {
            records,
            query,
            accessor,
        }
    }

    /// Keeps the records matching the query's filter, in their current
    /// order.
    pub fn filter(mut self) -> Self {
        let spec = self.query.filter_spec();
        if spec.is_empty() {
            return self;
        }

        let before = self.records.len();
        let matcher = spec.matcher();
        let accessor = &self.accessor;
        self.records.retain(|record| matcher.matches(*record, accessor));
        trace!(before, after = self.records.len(), "filtered records");
        self
    }

    /// Stable-sorts the records by the query's sort keys.
    ///
    /// When any record lacks a key field, or a key field has different
    /// kinds across records, the records keep their current order.
    pub fn sort(mut self) -> Self {
        let query = self.query;
        let keys = query.sort_spec().keys();
        if keys.is_empty() || self.records.len() < 2 {
            return self;
        }

        let Some(mut rows) = self.decorate() else {
            return self;
        };
        rows.sort_by(|(a, _), (b, _)| {
            compare_rows(a, b, keys).unwrap_or(std::cmp::Ordering::Equal)
        });
        self.records = rows.into_iter().map(|(_, record)| record).collect();
        trace!(records = self.records.len(), sort = %query.sort_spec(), "sorted records");
        self
    }

    /// Extracts each record's sort values up front.
    ///
    /// Returns `None` if a record has no value for some key, or if the
    /// values for one key are not all of the same kind.
    fn decorate(&self) -> Option<Vec<(Vec<Value<'r>>, &'r T)>> {
        let keys = self.query.sort_spec().keys();
        let mut rows = Vec::with_capacity(self.records.len());

        for &record in &self.records {
            let mut row = Vec::with_capacity(keys.len());
            for key in keys {
                let Some(value) = (self.accessor)(record, &key.field) else {
                    debug!(field = %key.field, "sort skipped: field absent on a record");
                    return None;
                };
                row.push(value);
            }
            rows.push((row, record));
        }

        if let Some((first, _)) = rows.first() {
            for (index, key) in keys.iter().enumerate() {
                let kind = first[index].kind();
                if rows.iter().any(|(row, _)| row[index].kind() != kind) {
                    debug!(field = %key.field, "sort skipped: field has mixed kinds");
                    return None;
                }
            }
        }

        Some(rows)
    }

    /// Cuts the records down to the query's page. Without a page this is a
    /// pass-through.
    pub fn paginate(mut self) -> Self {
        let Some(page) = self.query.page_spec() else {
            return self;
        };

        let range = page.bounds(self.records.len());
        self.records.truncate(range.end);
        self.records.drain(..range.start);
        trace!(
            page_size = page.page_size,
            offset = page.offset,
            returned = self.records.len(),
            "paginated records"
        );
        self
    }

    /// Runs filter, sort and paginate in that order.
    pub fn run(self) -> Self {
        self.filter().sort().paginate()
    }

    /// Returns the current records.
    pub fn records(&self) -> &[&'r T] {
        &self.records
    }

    /// Returns how many records are currently selected.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records are selected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the selector and returns the selected records.
    pub fn into_records(self) -> Vec<&'r T> {
        self.records
    }
}

impl<T, F> fmt::Debug for Selector<'_, '_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("records", &self.records.len())
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}
