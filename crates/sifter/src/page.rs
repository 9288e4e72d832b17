//! Page specifications and their validation.

use std::ops::Range;

use crate::error::{PageField, Result, SelectError};

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: i64 = 500;

/// Smallest page size; a page of zero selects nothing.
pub const MIN_PAGE_SIZE: i64 = 0;

/// Smallest offset.
pub const MIN_OFFSET: i64 = 0;

/// A window over the records: `page_size` records starting at `offset`.
///
/// Fields are signed so that out-of-range input can be represented and
/// rejected by [`validate`](Self::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSpec {
    /// How many records the page holds at most.
    pub page_size: i64,
    /// How many records to skip before the page starts.
    pub offset: i64,
}

/// The empty page: no records.
pub const EMPTY_PAGE: PageSpec = PageSpec::new(0, 0);

/// The first ten records.
pub const DEFAULT_PAGE: PageSpec = PageSpec::new(10, 0);

impl PageSpec {
    /// Creates a page.
    pub const fn new(page_size: i64, offset: i64) -> Self {
        PageSpec { page_size, offset }
    }

    /// Checks that `page_size` is within `[0, MAX_PAGE_SIZE]` and `offset`
    /// is not negative. The page size is checked first.
    ///
    /// ```
    /// use sifter::PageSpec;
    ///
    /// assert!(PageSpec::new(500, 0).validate().is_ok());
    ///
    /// let err = PageSpec::new(-1, -1).validate().unwrap_err();
    /// assert_eq!(err.message(), "value must be greater than or equal to 0");
    /// assert!(err.to_string().contains("page_size"));
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.page_size < MIN_PAGE_SIZE {
            return Err(SelectError::invalid_page(
                PageField::PageSize,
                format!("value must be greater than or equal to {MIN_PAGE_SIZE}"),
            ));
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(SelectError::invalid_page(
                PageField::PageSize,
                format!("value must be less than or equal to {MAX_PAGE_SIZE}"),
            ));
        }
        if self.offset < MIN_OFFSET {
            return Err(SelectError::invalid_page(
                PageField::Offset,
                format!("value must be greater than or equal to {MIN_OFFSET}"),
            ));
        }
        Ok(())
    }

    /// Returns the index range of this page within `len` records.
    ///
    /// The range is empty when the page size is zero, when the offset is at
    /// or past the end, or when either parameter is negative. A page that
    /// runs past the end is cut short.
    pub fn bounds(&self, len: usize) -> Range<usize> {
        let (Ok(start), Ok(size)) = (usize::try_from(self.offset), usize::try_from(self.page_size))
        else {
            return 0..0;
        };
        if size == 0 || start >= len {
            return 0..0;
        }
        let end = start.saturating_add(size).min(len);
        start..end
    }
}
