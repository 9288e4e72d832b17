//! Sort specifications.
//!
//! Provides [`Dir`] for sort direction, [`OrderBy`] for a single sort key and
//! [`SortSpec`] for the ordered list of keys a query sorts by.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SelectError;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses exactly `asc` or `desc`. Callers wanting case-insensitive input
/// lowercase first.
impl FromStr for Dir {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Dir::Asc),
            "desc" => Ok(Dir::Desc),
            other => Err(SelectError::InvalidDirection {
                direction: other.to_string(),
            }),
        }
    }
}

/// A single sort key: a field and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub dir: Dir,
}

impl OrderBy {
    /// Creates a new ascending key for the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy {
            field: field.into(),
            dir: Dir::Asc,
        }
    }

    /// Creates a new descending key for the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy {
            field: field.into(),
            dir: Dir::Desc,
        }
    }

    /// Creates a new key with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    /// Compares two values according to this key's direction.
    ///
    /// Returns `None` if the values are of different kinds.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
        let base_ordering = a.compare(b)?;
        Some(self.dir.apply(base_ordering))
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.dir)
    }
}

/// Ordered list of sort keys. The first key is the primary one; later keys
/// break ties. An empty list means "no sort".
///
/// `Display` renders the `orderBy` query parameter form, which
/// [`parse_order_by`](crate::parse_order_by) reads back:
///
/// ```
/// use sifter::{parse_order_by, OrderBy, SortSpec};
///
/// let spec = SortSpec::new(vec![OrderBy::asc("name"), OrderBy::desc("id")]);
/// assert_eq!(spec.to_string(), "name asc, id desc");
/// assert_eq!(parse_order_by(&spec.to_string()).unwrap(), spec);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortSpec {
    keys: Vec<OrderBy>,
}

/// The empty sort: records keep their order.
pub const NO_SORT: SortSpec = SortSpec { keys: Vec::new() };

impl SortSpec {
    /// Creates a sort from a list of keys.
    pub fn new(keys: Vec<OrderBy>) -> Self {
        SortSpec { keys }
    }

    /// Creates a sort from alternating `direction, field` tokens, e.g.
    /// `["asc", "name", "desc", "id"]`.
    ///
    /// Directions must be exactly `asc` or `desc`. An empty or odd-length
    /// list, or any other direction token, yields [`NO_SORT`] rather than an
    /// error.
    #[deprecated(note = "use `parse_order_by` or `SortSpec::new` instead")]
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        if tokens.is_empty() || tokens.len() % 2 == 1 {
            return NO_SORT;
        }

        let keys: Option<Vec<OrderBy>> = tokens
            .chunks_exact(2)
            .map(|pair| {
                let dir = pair[0].as_ref().parse::<Dir>().ok()?;
                Some(OrderBy::new(pair[1].as_ref(), dir))
            })
            .collect();

        keys.map(SortSpec::new).unwrap_or(NO_SORT)
    }

    /// Appends a key.
    pub fn push(&mut self, key: OrderBy) {
        self.keys.push(key);
    }

    /// Returns the keys in priority order.
    pub fn keys(&self) -> &[OrderBy] {
        &self.keys
    }

    /// Returns `true` if there is nothing to sort by.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

impl From<Vec<OrderBy>> for SortSpec {
    fn from(keys: Vec<OrderBy>) -> Self {
        SortSpec::new(keys)
    }
}

impl FromIterator<OrderBy> for SortSpec {
    fn from_iter<I: IntoIterator<Item = OrderBy>>(iter: I) -> Self {
        SortSpec::new(iter.into_iter().collect())
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

/// Compares two rows of pre-extracted sort values key by key.
///
/// The first key that differs decides; if all keys tie the rows are equal.
/// Returns `None` as soon as a pair of values has different kinds.
pub(crate) fn compare_rows(a: &[Value<'_>], b: &[Value<'_>], keys: &[OrderBy]) -> Option<Ordering> {
    for ((key, a), b) in keys.iter().zip(a).zip(b) {
        match key.compare(a, b)? {
            Ordering::Equal => continue,
            decided => return Some(decided),
        }
    }
    Some(Ordering::Equal)
}
