//! Paginated list responses.

use content_list::Pagination;
use serde::{Deserialize, Serialize};

/// One page of a server-side list.
///
/// `page` is zero-based, matching [`PaginatorState::page`].
///
/// [`PaginatorState::page`]: content_list::PaginatorState::page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    /// Total records across all pages.
    pub total: usize,
    pub page: usize,
    /// Page size requested.
    pub size: usize,
}

impl<T> PageResponse<T> {
    /// Pagination inputs describing this page.
    pub fn pagination(&self, rows_per_page_options: Vec<usize>) -> Pagination {
        Pagination::new(self.page * self.size, self.size)
            .with_total_records(self.total)
            .with_rows_per_page_options(rows_per_page_options)
    }

    /// Consumes the page and returns the items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
