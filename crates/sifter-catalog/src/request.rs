//! List requests: wire parameters in, a page of records out.

use serde::{Deserialize, Serialize};
use sifter::{parse_filter, parse_order_by, PageSpec, Query, Record, Result};
use tracing::debug;

/// Page size used when a request leaves `pageSize` at zero.
pub const DEFAULT_LIST_PAGE_SIZE: i32 = 20;

/// Server-side settings for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListOptions {
    /// Page size substituted for a `pageSize` of zero.
    pub default_page_size: i32,
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            default_page_size: DEFAULT_LIST_PAGE_SIZE,
        }
    }
}

/// The parameters every list endpoint accepts. Missing parameters read as
/// zero or empty.
///
/// ```
/// use sifter_catalog::ListRequest;
///
/// let request: ListRequest = serde_json::from_str(
///     r#"{"pageSize": 5, "orderBy": "name desc", "filter": "appName=web*"}"#,
/// ).unwrap();
/// assert_eq!(request.page_size, 5);
/// assert_eq!(request.offset, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRequest {
    pub page_size: i32,
    pub offset: i32,
    pub order_by: String,
    pub filter: String,
}

/// One page of a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    /// The records on this page.
    pub items: Vec<T>,
    /// How many records matched the filter, across all pages.
    pub total_elements: usize,
}

impl ListRequest {
    /// Builds the query this request describes.
    ///
    /// The page is validated first, then `orderBy` is parsed, then `filter`;
    /// the first problem found is returned.
    pub fn to_query(&self, options: &ListOptions) -> Result<Query> {
        let page_size = if self.page_size == 0 {
            options.default_page_size
        } else {
            self.page_size
        };
        let page = PageSpec::new(i64::from(page_size), i64::from(self.offset));
        page.validate()?;

        let sort = parse_order_by(&self.order_by)?;
        let filter = parse_filter(&self.filter)?;

        Ok(Query::new()
            .with_filter(filter)
            .with_sort(sort)
            .with_page(page)
            .build())
    }

    /// Selects a page of `records` with the default [`ListOptions`].
    pub fn select<'r, T: Record>(&self, records: &'r [T]) -> Result<ListPage<&'r T>> {
        self.select_with(records, &ListOptions::default())
    }

    /// Filters, sorts and paginates `records`.
    ///
    /// `total_elements` counts the records kept by the filter, before
    /// pagination.
    pub fn select_with<'r, T: Record>(
        &self,
        records: &'r [T],
        options: &ListOptions,
    ) -> Result<ListPage<&'r T>> {
        let query = match self.to_query(options) {
            Ok(query) => query,
            Err(err) => {
                debug!(error = %err, request = ?self, "rejected list request");
                return Err(err);
            }
        };

        let filtered = query.selector(records, T::accessor).filter();
        let total_elements = filtered.len();
        let items = filtered.sort().paginate().into_records();
        debug!(
            records = records.len(),
            total_elements,
            returned = items.len(),
            "selected list page"
        );

        Ok(ListPage {
            items,
            total_elements,
        })
    }
}

impl<T: Clone> ListPage<&T> {
    /// Clones the records on this page.
    pub fn cloned(&self) -> ListPage<T> {
        ListPage {
            items: self.items.iter().map(|item| (*item).clone()).collect(),
            total_elements: self.total_elements,
        }
    }
}
