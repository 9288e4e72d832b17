//! End-to-end selection over the canonical ten-record set.

use sifter::{
    parse_filter, parse_order_by, Dir, OrderBy, PageField, PageSpec, Predicate, Query, Record,
    SelectError, Selector, SortSpec, Value, EMPTY_PAGE, NO_FILTER, NO_SORT,
};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    name: &'static str,
    id: i64,
}

impl Record for Item {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "name" => Some(Value::text(self.name)),
            "id" => Some(Value::int(self.id)),
            _ => None,
        }
    }
}

fn items() -> Vec<Item> {
    [
        ("ab", 1),
        ("ab", 2),
        ("ab", 3),
        ("ac", 4),
        ("ac", 5),
        ("ad", 6),
        ("ba", 7),
        ("da", 8),
        ("ea", 9),
        ("aa", 10),
    ]
    .into_iter()
    .map(|(name, id)| Item { name, id })
    .collect()
}

fn ids(items: &[&Item]) -> Vec<i64> {
    items.iter().map(|item| item.id).collect()
}

fn sort_ids(keys: Vec<OrderBy>) -> Vec<i64> {
    let items = items();
    let query = Query::new().with_sort(SortSpec::new(keys));
    ids(&Selector::new(&items, &query, Item::accessor).sort().into_records())
}

fn filter_ids(filter: &str) -> Vec<i64> {
    let items = items();
    let query = Query::new().with_filter(parse_filter(filter).unwrap());
    ids(&Selector::new(&items, &query, Item::accessor).filter().into_records())
}

fn page_ids(page_size: i64, offset: i64) -> Vec<i64> {
    let items = items();
    let query = Query::new().page(page_size, offset);
    ids(&Selector::new(&items, &query, Item::accessor).paginate().into_records())
}

// ============================================================================
// Sort
// ============================================================================

#[test]
fn sort_by_id() {
    assert_eq!(sort_ids(vec![OrderBy::asc("id")]), (1..=10).collect::<Vec<_>>());
    assert_eq!(sort_ids(vec![OrderBy::desc("id")]), (1..=10).rev().collect::<Vec<_>>());
}

#[test]
fn sort_by_name_then_id_desc() {
    assert_eq!(
        sort_ids(vec![OrderBy::asc("name"), OrderBy::desc("id")]),
        vec![10, 3, 2, 1, 5, 4, 6, 7, 8, 9]
    );
}

#[test]
fn sort_with_unknown_field_keeps_order() {
    assert_eq!(
        sort_ids(vec![OrderBy::asc("name"), OrderBy::new("INVALID_FIELD", Dir::Desc)]),
        (1..=10).collect::<Vec<_>>()
    );
}

#[test]
fn no_sort_keeps_order() {
    let items = items();
    let query = Query::new().with_sort(NO_SORT);
    assert_eq!(ids(&query.select_records(&items)), (1..=10).collect::<Vec<_>>());
}

// ============================================================================
// Filter
// ============================================================================

#[test]
fn filter_ignores_case() {
    assert_eq!(filter_ids("name=Ab"), vec![1, 2, 3]);
}

#[test]
fn filter_disjunction_with_wildcards() {
    assert_eq!(filter_ids("name=ab* OR name=da*"), vec![1, 2, 3, 8]);
}

#[test]
fn filter_suffix_wildcard() {
    assert_eq!(filter_ids("name=*a"), vec![7, 8, 9, 10]);
}

#[test]
fn filter_substring_without_wildcard() {
    assert_eq!(filter_ids("name=a"), (1..=10).collect::<Vec<_>>());
    assert_eq!(filter_ids("name=d"), vec![6, 8]);
}

#[test]
fn filter_on_int_field() {
    assert_eq!(filter_ids("id=8"), vec![8]);
    assert_eq!(filter_ids("id=eight"), Vec::<i64>::new());
}

#[test]
fn filter_on_unknown_field_only() {
    assert_eq!(filter_ids("nope=ab"), Vec::<i64>::new());
    assert_eq!(filter_ids("nope=ab OR name=ea"), vec![9]);
}

#[test]
fn no_filter_keeps_everything() {
    let items = items();
    let query = Query::new().with_filter(NO_FILTER);
    assert_eq!(query.select_records(&items).len(), 10);
}

// ============================================================================
// Paginate
// ============================================================================

#[test]
fn pages() {
    assert_eq!(page_ids(2, 2), vec![3, 4]);
    assert_eq!(page_ids(3, 9), vec![10]);
    assert_eq!(page_ids(11, 0), (1..=10).collect::<Vec<_>>());
    assert_eq!(page_ids(1, 5), vec![6]);
    assert_eq!(page_ids(4, 8), vec![9, 10]);
}

#[test]
fn empty_pages() {
    assert_eq!(page_ids(1, 10), Vec::<i64>::new());
    assert_eq!(page_ids(3, 12), Vec::<i64>::new());
    assert_eq!(page_ids(0, 0), Vec::<i64>::new());
    assert_eq!(page_ids(0, 3), Vec::<i64>::new());

    let items = items();
    let query = Query::new().with_page(EMPTY_PAGE);
    assert!(query.select_records(&items).is_empty());
}

// ============================================================================
// Full pipeline
// ============================================================================

#[test]
fn filter_sort_paginate() {
    let items = items();
    let query = Query::new()
        .with_filter(parse_filter("name=a*").unwrap())
        .with_sort(parse_order_by("name desc, id").unwrap())
        .page(3, 1)
        .build();

    // a* keeps 1..6 and 10; name desc, id asc orders them 6, 4, 5, 1, 2, 3, 10.
    assert_eq!(ids(&query.select_records(&items)), vec![4, 5, 1]);
}

#[test]
fn select_cloned_returns_owned_records() {
    let items = items();
    let query = Query::new().filter_by("name", "ea").build();
    assert_eq!(
        query.select_cloned(&items, Item::accessor),
        vec![Item { name: "ea", id: 9 }]
    );
}

#[test]
fn closure_accessor() {
    let pairs = vec![("b", 2i64), ("a", 1)];
    let query = Query::new().order_asc("key").build();
    let sorted = query.select(&pairs, |pair, field| match field {
        "key" => Some(Value::int(pair.1)),
        _ => None,
    });
    assert_eq!(sorted[0].0, "a");
}

// ============================================================================
// Parsing and validation
// ============================================================================

#[test]
fn parse_filter_two_predicates() {
    let spec = parse_filter("name=abc OR age=30").unwrap();
    assert_eq!(
        spec.predicates(),
        &[Predicate::new("name", "abc"), Predicate::new("age", "30")]
    );
}

#[test]
fn parse_order_by_two_keys() {
    let spec = parse_order_by("name asc, id desc").unwrap();
    assert_eq!(spec.keys(), &[OrderBy::asc("name"), OrderBy::desc("id")]);
}

#[test]
fn parse_bogus() {
    assert!(matches!(parse_filter("bogus"), Err(SelectError::InvalidFilter { .. })));
    assert!(matches!(
        parse_order_by("name bogus"),
        Err(SelectError::InvalidDirection { .. })
    ));
}

#[test]
fn page_validation() {
    let err = PageSpec::new(501, 0).validate().unwrap_err();
    assert_eq!(err.message(), "value must be less than or equal to 500");
    assert!(matches!(err, SelectError::InvalidPage { field: PageField::PageSize, .. }));

    let err = PageSpec::new(10, -1).validate().unwrap_err();
    assert_eq!(err.message(), "value must be greater than or equal to 0");
    assert!(matches!(err, SelectError::InvalidPage { field: PageField::Offset, .. }));

    let err = PageSpec::new(-1, -1).validate().unwrap_err();
    assert!(matches!(err, SelectError::InvalidPage { field: PageField::PageSize, .. }));
    assert_eq!(err.to_string(), "validation error: page_size: value must be greater than or equal to 0");
}
