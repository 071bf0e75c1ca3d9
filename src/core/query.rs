//! Paginated result envelope
//!
//! A [`Pagination`] pairs a total match count with one page of data. The two
//! come from criteria-equivalent specifications (same predicate, paging and
//! includes only on the page side), which is what makes the count valid for
//! the page. Constructed once per request, never mutated, never persisted.

use serde::Serialize;

/// One page of results plus the total count ignoring paging
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    /// Requested page number (starts at 1)
    pub page_index: usize,

    /// Requested page size
    pub page_size: usize,

    /// Total number of matching rows, ignoring the paging window
    pub count: usize,

    /// The rows for the requested window, in specification order
    pub data: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(page_index: usize, page_size: usize, count: usize, data: Vec<T>) -> Self {
        Self {
            page_index,
            page_size,
            count,
            data,
        }
    }

    /// Total number of pages at this page size
    pub fn total_pages(&self) -> usize {
        if self.count == 0 {
            0
        } else {
            self.count.div_ceil(self.page_size.max(1))
        }
    }

    /// Whether a later page would return any rows
    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages()
    }

    /// Whether an earlier page exists
    pub fn has_prev(&self) -> bool {
        self.page_index > 1
    }
}
