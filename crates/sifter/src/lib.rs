//! Sifter - filter, sort and paginate in-memory record collections.
//!
//! Sifter turns the parameters of a list request (`filter`, `orderBy`,
//! `pageSize`, `offset`) into a [`Query`] and runs it over a slice of
//! records. It provides:
//!
//! - A closed family of comparable [`Value`]s: integers, case-insensitive
//!   text, RFC 3339 strings and instants
//! - The [`Record`] adapter trait, derivable with the `derive` feature
//! - Parsers for the `orderBy` and `filter` parameters
//! - Page validation with fixed human-readable messages
//! - A pipeline executor ([`Selector`]) whose stages never fail
//!
//! # Quick Start
//!
//! ```rust
//! use sifter::{parse_filter, parse_order_by, PageSpec, Query, Record, Value};
//!
//! struct Deployment {
//!     name: String,
//!     app_version: String,
//! }
//!
//! impl Record for Deployment {
//!     fn field(&self, name: &str) -> Option<Value<'_>> {
//!         match name {
//!             "name" => Some(Value::text(self.name.as_str())),
//!             "appVersion" => Some(Value::text(self.app_version.as_str())),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let deployments = vec![
//!     Deployment { name: "web-east".into(), app_version: "1.2.0".into() },
//!     Deployment { name: "db".into(), app_version: "3.0.1".into() },
//!     Deployment { name: "web-west".into(), app_version: "1.3.0".into() },
//! ];
//!
//! let page = PageSpec::new(10, 0);
//! page.validate()?;
//!
//! let query = Query::new()
//!     .with_filter(parse_filter("name=WEB*")?)
//!     .with_sort(parse_order_by("appVersion desc")?)
//!     .with_page(page)
//!     .build();
//!
//! let results = query.select_records(&deployments);
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].name, "web-west");
//! # Ok::<(), sifter::SelectError>(())
//! ```
//!
//! # Query Semantics
//!
//! ```text
//! keep   = no predicates, or any predicate whose field exists contains its value
//! order  = stable, key by key; untouched if any record lacks a key field
//! page   = records[offset .. offset + page_size], clamped; empty if page_size = 0
//! ```
//!
//! Text comparison ignores case. A text needle without `*` matches as a
//! substring; with `*` it must match the whole value, each `*` standing for
//! any run of characters.
//!
//! # Value Kinds
//!
//! | Kind | Ordering | Contains |
//! |------|----------|----------|
//! | `Int` | numeric | equal |
//! | `Text` | case-insensitive | substring or wildcard |
//! | `Rfc3339` | by instant, whole seconds; lexical if unparsable | equal |
//! | `Instant` | whole seconds | equal |

mod clause;
mod error;
mod ordering;
mod page;
mod parse;
mod pattern;
mod query;
mod record;
mod select;
mod value;

// Re-export public API
pub use clause::{FilterSpec, Matcher, Predicate, NO_FILTER};
pub use error::{PageField, Result, SelectError};
pub use ordering::{Dir, OrderBy, SortSpec, NO_SORT};
pub use page::{PageSpec, DEFAULT_PAGE, EMPTY_PAGE, MAX_PAGE_SIZE, MIN_OFFSET, MIN_PAGE_SIZE};
pub use parse::{parse_filter, parse_order_by};
pub use pattern::Pattern;
pub use query::{Query, DEFAULT_SELECT};
pub use record::{FieldInstant, FieldInt, FieldLabel, FieldText, Record};
pub use select::Selector;
pub use value::{Kind, Value};

#[cfg(feature = "derive")]
pub use sifter_macros::Record;
