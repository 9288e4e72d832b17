//! Query builder and executor.
//!
//! The [`Query`] struct bundles the three parts of a list request (filter,
//! sort and page) and provides a fluent builder for them plus shorthands for
//! running the whole pipeline.

use crate::clause::{FilterSpec, Predicate, NO_FILTER};
use crate::ordering::{Dir, OrderBy, SortSpec, NO_SORT};
use crate::page::{PageSpec, DEFAULT_PAGE};
use crate::record::Record;
use crate::select::Selector;
use crate::value::Value;

/// A complete selection: which records to keep, how to order them and
/// which page to return.
///
/// Filter predicates are alternatives: a record is kept when any of them
/// matches. Sort keys apply in order. Without a page every record is
/// returned.
///
/// # Example
///
/// ```
/// use sifter::{Query, Dir, PageSpec};
///
/// let query = Query::new()
///     .filter_by("name", "web*")
///     .filter_by("name", "api*")
///     .order_by("createTime", Dir::Desc)
///     .order_asc("name")
///     .page(20, 40)
///     .build();
///
/// assert_eq!(query.filter_spec().len(), 2);
/// assert_eq!(query.sort_spec().to_string(), "createTime desc, name asc");
/// assert_eq!(query.page_spec(), Some(PageSpec::new(20, 40)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    filter: FilterSpec,
    sort: SortSpec,
    page: Option<PageSpec>,
}

/// The first [`DEFAULT_PAGE`] of records, unsorted and unfiltered.
pub const DEFAULT_SELECT: Query = Query {
    filter: NO_FILTER,
    sort: NO_SORT,
    page: Some(DEFAULT_PAGE),
};

impl Query {
    /// Creates a new empty query.
    ///
    /// An empty query returns every record in its original order.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Whole specs
    // ========================================================================

    /// Replaces the filter.
    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filter = filter;
        self
    }

    /// Replaces the sort.
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the page.
    pub fn with_page(mut self, page: PageSpec) -> Self {
        self.page = Some(page);
        self
    }

    // ========================================================================
    // Filter
    // ========================================================================

    /// Adds a predicate: keep records whose `field` contains `value`.
    pub fn filter_by<'v>(mut self, field: &str, value: impl Into<Value<'v>>) -> Self {
        self.filter.push(Predicate::new(field, value));
        self
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    /// Adds a sort key.
    pub fn order_by(mut self, field: &str, dir: Dir) -> Self {
        self.sort.push(OrderBy::new(field, dir));
        self
    }

    /// Adds an ascending sort key.
    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, Dir::Asc)
    }

    /// Adds a descending sort key.
    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, Dir::Desc)
    }

    // ========================================================================
    // Page
    // ========================================================================

    /// Sets the page from its size and offset.
    pub fn page(self, page_size: i64, offset: i64) -> Self {
        self.with_page(PageSpec::new(page_size, offset))
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Finalizes the query.
    ///
    /// This is a no-op that returns self, but makes the builder pattern
    /// more explicit.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the filter.
    pub fn filter_spec(&self) -> &FilterSpec {
        &self.filter
    }

    /// Returns the sort.
    pub fn sort_spec(&self) -> &SortSpec {
        &self.sort
    }

    /// Returns the page, if any.
    pub fn page_spec(&self) -> Option<PageSpec> {
        self.page
    }

    /// Returns `true` if the query has no filter, no sort and no page.
    pub fn is_empty(&self) -> bool {
        self.filter.is_empty() && self.sort.is_empty() && self.page.is_none()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests a single record against the filter.
    pub fn matches<T, F>(&self, record: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Option<Value<'a>>,
    {
        self.filter.matcher().matches(record, &accessor)
    }

    /// Creates a [`Selector`] for running the stages one by one.
    pub fn selector<'r, 'q, T, F>(&'q self, records: &'r [T], accessor: F) -> Selector<'r, 'q, T, F>
    where
        for<'a> F: Fn(&'a T, &str) -> Option<Value<'a>>,
    {
        Selector::new(records, self, accessor)
    }

    /// Filters, sorts and paginates `records`, returning references to the
    /// selected ones.
    pub fn select<'r, T, F>(&self, records: &'r [T], accessor: F) -> Vec<&'r T>
    where
        for<'a> F: Fn(&'a T, &str) -> Option<Value<'a>>,
    {
        self.selector(records, accessor).run().into_records()
    }

    /// Like [`select`](Self::select), for record kinds implementing
    /// [`Record`].
    pub fn select_records<'r, T: Record>(&self, records: &'r [T]) -> Vec<&'r T> {
        self.select(records, T::accessor)
    }

    /// Like [`select`](Self::select), cloning the selected records.
    pub fn select_cloned<T, F>(&self, records: &[T], accessor: F) -> Vec<T>
    where
        T: Clone,
        for<'a> F: Fn(&'a T, &str) -> Option<Value<'a>>,
    {
        self.select(records, accessor).into_iter().cloned().collect()
    }

    /// Counts the records the filter keeps, ignoring sort and page.
    pub fn count<T, F>(&self, records: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Option<Value<'a>>,
    {
        let matcher = self.filter.matcher();
        records
            .iter()
            .filter(|record| matcher.matches(*record, &accessor))
            .count()
    }
}
