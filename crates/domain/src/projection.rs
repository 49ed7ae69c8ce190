//! Projection — the read-only search filter and page slice over the catalog.
//!
//! [`project`] is a pure function: identical inputs always yield identical
//! output and the dataset is never touched.

use crate::service_record::ServiceRecord;

/// Fixed number of rows per page.
pub const PAGE_SIZE: usize = 100;

/// Visible rows plus pagination metadata for one `(query, page)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    /// Rows of the requested page, in dataset order.
    pub rows: Vec<&'a ServiceRecord>,
    /// Number of records matching the query.
    pub filtered_count: usize,
    /// `ceil(filtered_count / page_size)`; zero when nothing matches.
    pub page_count: usize,
    /// `page_count` with a floor of one page, used for boundary checks.
    pub total_pages: usize,
    /// Requested page clamped to `[1, total_pages]`.
    pub clamped_page: usize,
}

/// Search query matching a record by name or id.
///
/// Name matching is case-insensitive; id matching is a case-sensitive
/// substring test on the id's textual form. The two are OR-ed.
#[derive(Debug, Clone)]
pub struct SearchFilter<'q> {
    raw: &'q str,
    folded: String,
}

impl<'q> SearchFilter<'q> {
    #[must_use]
    pub fn new(query: &'q str) -> Self {
        Self {
            raw: query,
            folded: query.to_lowercase(),
        }
    }

    #[must_use]
    pub fn matches(&self, record: &ServiceRecord) -> bool {
        if self.raw.is_empty() {
            return true;
        }
        let by_name = record
            .service_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&self.folded));
        by_name || record.id.as_ref().is_some_and(|id| id.contains(self.raw))
    }
}

/// Filter `dataset` by `query` and slice out page `page` (1-based).
///
/// A page outside `[1, page_count]` yields no rows rather than an error.
#[must_use]
pub fn project<'a>(
    dataset: &'a [ServiceRecord],
    query: &str,
    page: usize,
    page_size: usize,
) -> Projection<'a> {
    let filter = SearchFilter::new(query);
    let filtered: Vec<&ServiceRecord> = dataset.iter().filter(|r| filter.matches(r)).collect();

    let filtered_count = filtered.len();
    let page_count = page_count(filtered_count, page_size);
    let total_pages = page_count.max(1);

    Projection {
        rows: page_slice(&filtered, page, page_size).to_vec(),
        filtered_count,
        page_count,
        total_pages,
        clamped_page: page.clamp(1, total_pages),
    }
}

/// Number of records in `dataset` matching `query`.
#[must_use]
pub fn filtered_count(dataset: &[ServiceRecord], query: &str) -> usize {
    let filter = SearchFilter::new(query);
    dataset.iter().filter(|r| filter.matches(r)).count()
}

/// `ceil(len / page_size)`, zero for an empty set or a zero page size.
#[must_use]
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
