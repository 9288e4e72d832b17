//! Wildcard matching for case-insensitive text values.
//!
//! A needle without `*` matches any haystack containing it as a substring.
//! A needle with at least one `*` is anchored at both ends, and each `*`
//! stands for any run of characters, possibly empty:
//!
//! | Needle | Matches |
//! |--------|---------|
//! | `ab`   | anything containing `ab` |
//! | `ab*`  | anything starting with `ab` |
//! | `*b`   | anything ending with `b` |
//! | `*a*`  | anything containing `a` |
//!
//! Both sides are lowercased before matching.

use regex::Regex;
use tracing::debug;

/// A compiled text needle.
///
/// Compiling is the expensive part for wildcard needles, so the filter stage
/// builds one `Pattern` per distinct needle and reuses it for every record.
///
/// ```
/// use sifter::Pattern;
///
/// let pattern = Pattern::new("1.2.*");
/// assert!(pattern.matches("1.2.7"));
/// assert!(!pattern.matches("1.20"));
/// assert!(Pattern::new("Dep").matches("my-deployment"));
/// ```
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Plain substring needle (already lowercased).
    Substring(String),
    /// Anchored wildcard needle. `None` when the expression could not be
    /// built; such a pattern matches nothing.
    Wildcard(Option<Regex>),
}

impl Pattern {
    /// Compiles a needle.
    pub fn new(needle: &str) -> Self {
        let needle = needle.to_lowercase();
        if !needle.contains('*') {
            return Pattern::Substring(needle);
        }

        let body = needle
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        match Regex::new(&format!("(?s)^{body}$")) {
            Ok(regex) => Pattern::Wildcard(Some(regex)),
            Err(err) => {
                debug!(pattern = %needle, error = %err, "wildcard pattern failed to compile; it matches nothing");
                Pattern::Wildcard(None)
            }
        }
    }

    /// Returns `true` if this is a wildcard pattern.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Pattern::Wildcard(_))
    }

    /// Tests the pattern against a haystack, ignoring case.
    pub fn matches(&self, haystack: &str) -> bool {
        let haystack = haystack.to_lowercase();
        match self {
            Pattern::Substring(needle) => haystack.contains(needle.as_str()),
            Pattern::Wildcard(Some(regex)) => regex.is_match(&haystack),
            Pattern::Wildcard(None) => false,
        }
    }
}
