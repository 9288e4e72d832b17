//! The record adapter.
//!
//! A record kind takes part in queries by implementing [`Record`]: given a
//! field name, return that field as a [`Value`], or `None` when the kind has
//! no such field. The `#[derive(Record)]` macro (feature `derive`) writes this
//! dispatch from field annotations, using the `Field*` helper traits below to
//! turn struct fields into values.

use chrono::{DateTime, Utc};

use crate::value::Value;

/// Trait for record kinds that can be filtered and sorted.
///
/// Field names are matched exactly and case-sensitively. A field that is not
/// part of the kind must return `None`; the executor ignores such fields
/// rather than treating them as errors.
///
/// # Derive Usage
///
/// ```ignore
/// use sifter::{Record, FieldLabel};
///
/// #[derive(Record)]
/// #[record(rename_all = "camelCase")]
/// struct Deployment {
///     #[field(Text)]
///     name: String,
///     #[field(Text)]
///     app_version: String,     // queried as "appVersion"
///     #[field(Label)]
///     state: State,            // requires `FieldLabel`
///     #[field(Instant)]
///     create_time: Option<DateTime<Utc>>,
/// }
/// ```
///
/// # Manual Implementation
///
/// ```
/// use sifter::{Record, Value};
///
/// struct ClusterInfo {
///     id: String,
///     name: String,
/// }
///
/// impl Record for ClusterInfo {
///     fn field(&self, name: &str) -> Option<Value<'_>> {
///         match name {
///             "id" => Some(Value::text(self.id.as_str())),
///             "name" => Some(Value::text(self.name.as_str())),
///             _ => None,
///         }
///     }
/// }
///
/// let info = ClusterInfo { id: "c-1".into(), name: "edge".into() };
/// assert_eq!(info.field("name"), Some(Value::text("edge")));
/// assert_eq!(info.field("Name"), None);
/// ```
pub trait Record {
    /// Returns the value of a field, or `None` if the kind has no such field.
    fn field(&self, name: &str) -> Option<Value<'_>>;

    /// Returns [`field`](Self::field) as a free function, suitable for the
    /// accessor-taking query methods.
    ///
    /// ```ignore
    /// let page = query.select(&deployments, Deployment::accessor);
    /// ```
    fn accessor<'a>(record: &'a Self, name: &str) -> Option<Value<'a>>
    where
        Self: Sized,
    {
        record.field(name)
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        (**self).field(name)
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        (**self).field(name)
    }
}

/// Textual label of a status-like enum.
///
/// Labels are exposed as case-insensitive text, so they sort alphabetically
/// rather than by any meaning the variants carry.
///
/// # Example
///
/// ```
/// use sifter::FieldLabel;
///
/// enum State {
///     Running,
///     Down,
/// }
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
/// assert_eq!(State::Down.label(), "DOWN");
/// ```
pub trait FieldLabel {
    /// Returns the label for this variant.
    fn label(&self) -> &'static str;
}

/// Integer view of a struct field, used by `#[field(Int)]`.
///
/// Returns `None` when the field is unset or does not fit in an `i64`.
pub trait FieldInt {
    fn field_int(&self) -> Option<i64>;
}

/// String view of a struct field, used by `#[field(Text)]` and
/// `#[field(Rfc3339)]`.
pub trait FieldText {
    fn field_text(&self) -> Option<&str>;
}

/// Instant view of a struct field, used by `#[field(Instant)]`.
pub trait FieldInstant {
    fn field_instant(&self) -> Option<DateTime<Utc>>;
}

macro_rules! lossless_int {
    ($($ty:ty),*) => {
        $(
            impl FieldInt for $ty {
                fn field_int(&self) -> Option<i64> {
                    Some(i64::from(*self))
                }
            }
        )*
    };
}

lossless_int!(i8, i16, i32, i64, u8, u16, u32);

impl FieldInt for u64 {
    fn field_int(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }
}

impl FieldInt for usize {
    fn field_int(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }
}

impl FieldInt for isize {
    fn field_int(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }
}

impl<T: FieldInt> FieldInt for Option<T> {
    fn field_int(&self) -> Option<i64> {
        self.as_ref().and_then(FieldInt::field_int)
    }
}

impl FieldText for String {
    fn field_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl FieldText for str {
    fn field_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: FieldText> FieldText for Option<T> {
    fn field_text(&self) -> Option<&str> {
        self.as_ref().and_then(FieldText::field_text)
    }
}

impl FieldInstant for DateTime<Utc> {
    fn field_instant(&self) -> Option<DateTime<Utc>> {
        Some(*self)
    }
}

impl<T: FieldInstant> FieldInstant for Option<T> {
    fn field_instant(&self) -> Option<DateTime<Utc>> {
        self.as_ref().and_then(FieldInstant::field_instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Clone, Copy)]
    enum State {
        Running,
        Down,
    }

    impl FieldLabel for State {
        fn label(&self) -> &'static str {
            match self {
                State::Running => "RUNNING",
                State::Down => "DOWN",
            }
        }
    }

    struct Node {
        name: String,
        pods: u32,
        state: State,
    }

    impl Record for Node {
        fn field(&self, name: &str) -> Option<Value<'_>> {
            match name {
                "name" => Some(Value::text(self.name.as_str())),
                "pods" => Some(Value::from(self.pods)),
                "state" => Some(Value::text(self.state.label())),
                _ => None,
            }
        }
    }

    fn node() -> Node {
        Node {
            name: "worker".to_string(),
            pods: 12,
            state: State::Running,
        }
    }

    #[test]
    fn manual_impl() {
        let node = node();
        assert_eq!(node.field("name"), Some(Value::text("worker")));
        assert_eq!(node.field("pods"), Some(Value::int(12)));
        assert_eq!(node.field("state"), Some(Value::text("RUNNING")));
        assert_eq!(node.field("unknown"), None);
    }

    #[test]
    fn field_names_are_case_sensitive() {
        assert_eq!(node().field("Name"), None);
    }

    #[test]
    fn accessor_forwards() {
        let node = node();
        assert_eq!(Node::accessor(&node, "pods"), Some(Value::int(12)));
    }

    #[test]
    fn references_and_boxes_are_records() {
        let node = node();
        let by_ref: &Node = &node;
        assert_eq!(Record::field(&by_ref, "pods"), Some(Value::int(12)));

        let boxed: Box<dyn Record> = Box::new(node);
        assert_eq!(boxed.field("name"), Some(Value::text("worker")));
    }

    #[test]
    fn labels() {
        assert_eq!(State::Running.label(), "RUNNING");
        assert_eq!(State::Down.label(), "DOWN");
    }

    #[test]
    fn int_views() {
        assert_eq!(7u8.field_int(), Some(7));
        assert_eq!((-7i32).field_int(), Some(-7));
        assert_eq!(u64::MAX.field_int(), None);
        assert_eq!(Some(3usize).field_int(), Some(3));
        assert_eq!(None::<i64>.field_int(), None);
    }

    #[test]
    fn text_views() {
        assert_eq!(String::from("a").field_text(), Some("a"));
        assert_eq!(Some(String::from("b")).field_text(), Some("b"));
        assert_eq!(None::<String>.field_text(), None);
    }

    #[test]
    fn instant_views() {
        let at = Utc.timestamp_opt(100, 0).unwrap();
        assert_eq!(at.field_instant(), Some(at));
        assert_eq!(Some(at).field_instant(), Some(at));
        assert_eq!(None::<DateTime<Utc>>.field_instant(), None);
    }
}
