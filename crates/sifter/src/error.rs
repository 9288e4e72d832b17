//! Error types for the sifter crate.
//!
//! Every error here is an invalid-argument error raised while turning user
//! input into a query. Executing a query never fails.

use std::fmt;

use thiserror::Error;

/// The page parameter a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageField {
    /// The `pageSize` parameter.
    PageSize,
    /// The `offset` parameter.
    Offset,
}

impl PageField {
    /// Returns the wire name of this parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            PageField::PageSize => "page_size",
            PageField::Offset => "offset",
        }
    }
}

impl fmt::Display for PageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the query parsers and the page validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// An `orderBy` segment is empty or has more than two tokens.
    #[error("invalid format for order by parameter: {segment:?}")]
    InvalidOrderBy { segment: String },

    /// An `orderBy` direction is neither `asc` nor `desc`.
    #[error("invalid order direction {direction:?}; must be 'asc' or 'desc'")]
    InvalidDirection { direction: String },

    /// A filter sub-expression is not of the form `field=value`.
    #[error("invalid filter request: {expression:?}")]
    InvalidFilter { expression: String },

    /// A page parameter is outside its allowed range.
    #[error("validation error: {field}: {reason}")]
    InvalidPage { field: PageField, reason: String },
}

impl SelectError {
    pub(crate) fn invalid_page(field: PageField, reason: impl Into<String>) -> Self {
        SelectError::InvalidPage {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the human-readable message for this error.
    ///
    /// For page errors this is the bare constraint, e.g.
    /// `value must be less than or equal to 500`.
    pub fn message(&self) -> String {
        match self {
            SelectError::InvalidPage { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type for sifter operations.
pub type Result<T> = std::result::Result<T, SelectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_error_message_is_bare_reason() {
        let err = SelectError::invalid_page(PageField::Offset, "value must be greater than or equal to 0");
        assert_eq!(err.message(), "value must be greater than or equal to 0");
        assert_eq!(
            err.to_string(),
            "validation error: offset: value must be greater than or equal to 0"
        );
    }

    #[test]
    fn parse_error_message_is_display() {
        let err = SelectError::InvalidFilter {
            expression: "bogus".into(),
        };
        assert_eq!(err.message(), err.to_string());
        assert!(err.message().contains("bogus"));
    }
}
