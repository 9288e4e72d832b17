//! Comparable field values.
//!
//! The [`Value`] enum is the engine's uniform view of a record field. It is a
//! closed family: integers, case-insensitive text, RFC 3339 timestamp strings
//! and instants. Every variant offers a total order against its own kind
//! ([`Value::compare`]) and a containment test ([`Value::contains`]) used by
//! filter predicates.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::pattern::Pattern;

/// Runtime value of a record field.
///
/// Values extracted from records usually borrow from them
/// ([`Cow::Borrowed`]); values stored in filter predicates own their data
/// (`Value<'static>`).
///
/// The derived `PartialEq` is structural (`Text("Ab") != Text("ab")`); use
/// [`Value::compare`] for the engine's notion of equality.
///
/// # Example
///
/// ```
/// use sifter::Value;
///
/// struct Cluster {
///     name: String,
///     nodes: u32,
/// }
///
/// fn accessor<'a>(cluster: &'a Cluster, field: &str) -> Option<Value<'a>> {
///     match field {
///         "name" => Some(Value::text(cluster.name.as_str())),
///         "nodes" => Some(Value::from(cluster.nodes)),
///         _ => None,
///     }
/// }
///
/// let edge = Cluster { name: "Edge-1".into(), nodes: 3 };
/// assert!(accessor(&edge, "name").unwrap().contains(&Value::text("edge*")));
/// assert!(accessor(&edge, "zone").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
    /// Integer, ordered numerically.
    Int(i64),
    /// Text, ordered and matched after lowercasing; supports `*` wildcards.
    Text(Cow<'a, str>),
    /// RFC 3339 timestamp string, ordered by instant when both sides parse.
    Rfc3339(Cow<'a, str>),
    /// Wall-clock instant, ordered by whole seconds since the Unix epoch.
    Instant(DateTime<Utc>),
}

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Text,
    Rfc3339,
    Instant,
}

impl Kind {
    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Text => "text",
            Kind::Rfc3339 => "rfc3339",
            Kind::Instant => "instant",
        }
    }

    /// Reads raw query text as a value of this kind.
    ///
    /// Filter values arrive as text; this is how they are brought to the
    /// kind of the field they are compared with. Returns `None` when the
    /// text is not a valid value of this kind.
    pub fn parse(self, raw: &str) -> Option<Value<'static>> {
        match self {
            Kind::Int => raw.trim().parse().ok().map(Value::Int),
            Kind::Text => Some(Value::text(raw.to_owned())),
            Kind::Rfc3339 => Some(Value::rfc3339(raw.to_owned())),
            Kind::Instant => DateTime::parse_from_rfc3339(raw.trim())
                .ok()
                .map(|instant| Value::Instant(instant.with_timezone(&Utc))),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> Value<'a> {
    /// Creates an integer value.
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Creates a case-insensitive text value.
    pub fn text(s: impl Into<Cow<'a, str>>) -> Self {
        Value::Text(s.into())
    }

    /// Creates an RFC 3339 timestamp value.
    pub fn rfc3339(s: impl Into<Cow<'a, str>>) -> Self {
        Value::Rfc3339(s.into())
    }

    /// Creates an instant value.
    pub fn instant(at: DateTime<Utc>) -> Self {
        Value::Instant(at)
    }

    /// Returns the variant of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Text(_) => Kind::Text,
            Value::Rfc3339(_) => Kind::Rfc3339,
            Value::Instant(_) => Kind::Instant,
        }
    }

    /// Extracts the integer, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the string of a `Text` or `Rfc3339` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Rfc3339(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the instant, if this is an `Instant`.
    pub fn as_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Instant(at) => Some(*at),
            _ => None,
        }
    }

    /// Detaches this value from the record it was borrowed from.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Int(n) => Value::Int(n),
            Value::Text(s) => Value::Text(Cow::Owned(s.into_owned())),
            Value::Rfc3339(s) => Value::Rfc3339(Cow::Owned(s.into_owned())),
            Value::Instant(at) => Value::Instant(at),
        }
    }

    /// Orders this value against another of the same kind.
    ///
    /// Returns `None` when the kinds differ. Comparing mismatched kinds is a
    /// bug in the caller, so it panics in debug builds.
    pub fn compare(&self, other: &Value<'_>) -> Option<Ordering> {
        let ordering = match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => compare_folded(a, b),
            (Value::Rfc3339(a), Value::Rfc3339(b)) => compare_rfc3339(a, b),
            (Value::Instant(a), Value::Instant(b)) => a.timestamp().cmp(&b.timestamp()),
            _ => {
                if cfg!(debug_assertions) {
                    panic!(
                        "mismatched value kinds: cannot compare {} with {}",
                        self.kind(),
                        other.kind()
                    );
                }
                return None;
            }
        };
        Some(ordering)
    }

    /// Returns `true` if this value is matched by `needle`.
    ///
    /// Text uses case-insensitive substring or wildcard matching (see
    /// [`Pattern`]); every other kind matches when [`compare`](Self::compare)
    /// reports equality. Mismatched kinds never match.
    pub fn contains(&self, needle: &Value<'_>) -> bool {
        match (self, needle) {
            (Value::Text(haystack), Value::Text(needle)) => Pattern::new(needle).matches(haystack),
            _ if self.kind() != needle.kind() => false,
            _ => self.compare(needle) == Some(Ordering::Equal),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) | Value::Rfc3339(s) => f.write_str(s),
            Value::Instant(at) => write!(f, "{}", at.to_rfc3339()),
        }
    }
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

// Both sides are parsed before deciding, so the string fallback is applied
// symmetrically.
fn compare_rfc3339(a: &str, b: &str) -> Ordering {
    match (
        DateTime::parse_from_rfc3339(a),
        DateTime::parse_from_rfc3339(b),
    ) {
        (Ok(a), Ok(b)) => a.timestamp().cmp(&b.timestamp()),
        _ => a.as_bytes().cmp(b.as_bytes()),
    }
}

// Conversions from common types

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value<'_> {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<u32> for Value<'_> {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i16> for Value<'_> {
    fn from(n: i16) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<u16> for Value<'_> {
    fn from(n: u16) -> Self {
        Value::Int(i64::from(n))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(Cow::Borrowed(s))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Text(Cow::Owned(s))
    }
}

impl From<DateTime<Utc>> for Value<'_> {
    fn from(at: DateTime<Utc>) -> Self {
        Value::Instant(at)
    }
}
