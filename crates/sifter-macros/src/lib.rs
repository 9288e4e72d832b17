//! Proc macros for Sifter.
//!
//! - [`Record`] - Generate the `sifter::Record` field dispatch from struct
//!   field annotations
//!
//! Use it through `sifter` with the `derive` feature enabled rather than
//! depending on this crate directly.

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Record` trait for queryable structs.
///
/// Only annotated fields take part in queries; the rest are ignored.
///
/// # Field Attributes
///
/// | Attribute | Value | Field type must implement |
/// |-----------|-------|---------------------------|
/// | `Int` | `Value::Int` | `FieldInt` (integers, `Option<_>`) |
/// | `Text` | `Value::Text` | `FieldText` (`String`, `Option<String>`) |
/// | `Rfc3339` | `Value::Rfc3339` | `FieldText` |
/// | `Instant` | `Value::Instant` | `FieldInstant` (`DateTime<Utc>`, `Option<_>`) |
/// | `Label` | `Value::Text` | `FieldLabel` |
/// | `skip` | | Exclude this field from queries |
/// | `rename = "..."` | | Use a custom name for queries |
///
/// An unset `Option` field reads as absent.
///
/// # Struct Attributes
///
/// `#[record(rename_all = "camelCase")]` derives query names from field
/// identifiers (`create_time` becomes `createTime`). `PascalCase` and
/// `snake_case` are also accepted.
///
/// # Generated Code
///
/// 1. Field name constants (e.g., `Deployment::APP_NAME == "appName"`) and
///    `FIELD_NAMES`, listing every query name
/// 2. Implementation of `Record::field()`
///
/// # Example
///
/// ```ignore
/// use sifter::{FieldLabel, Query, Record};
///
/// enum State { Running, Down }
///
/// impl FieldLabel for State {
///     fn label(&self) -> &'static str {
///         match self {
///             State::Running => "RUNNING",
///             State::Down => "DOWN",
///         }
///     }
/// }
///
/// #[derive(Record)]
/// #[record(rename_all = "camelCase")]
/// struct Deployment {
///     #[field(Text)]
///     name: String,
///
///     #[field(Text)]
///     app_version: String,
///
///     #[field(Label, rename = "status")]
///     state: State,
///
///     #[field(skip)]
///     token: String,
/// }
///
/// let query = Query::new()
///     .filter_by(Deployment::STATUS, "running")
///     .order_desc(Deployment::APP_VERSION)
///     .build();
///
/// let selected = query.select_records(&deployments);
/// ```
#[proc_macro_derive(Record, attributes(field, record))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
