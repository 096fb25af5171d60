//! Pagination inputs and paginator events.

use serde::{Deserialize, Serialize};

/// Rows-per-page choices offered when the host supplies none.
pub const DEFAULT_ROWS_PER_PAGE_OPTIONS: [usize; 3] = [10, 20, 30];

/// State reported by the paginator when the user changes page.
///
/// The list relays this to the host untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatorState {
    /// Index of the first record on the requested page.
    pub first: usize,
    /// Page size.
    pub rows: usize,
    /// Zero-based page number.
    pub page: usize,
    /// Total number of pages.
    pub page_count: usize,
}

/// Host-owned pagination inputs.
///
/// # Example
///
/// ```
/// use content_list::Pagination;
///
/// let pagination = Pagination::new(20, 10).with_total_records(45);
/// assert_eq!(pagination.page_count(), 5);
/// assert_eq!(pagination.current_page(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Index of the first record of the current page.
    pub first: usize,
    /// Page size.
    pub rows: usize,
    /// Total records available on the server.
    pub total_records: usize,
    /// Page sizes offered by the paginator.
    pub rows_per_page_options: Vec<usize>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            first: 0,
            rows: 0,
            total_records: 0,
            rows_per_page_options: DEFAULT_ROWS_PER_PAGE_OPTIONS.to_vec(),
        }
    }
}

impl Pagination {
    /// Creates pagination starting at `first` with `rows` per page.
    pub fn new(first: usize, rows: usize) -> Self {
        Self {
            first,
            rows,
            ..Default::default()
        }
    }

    /// Sets the total record count.
    pub fn with_total_records(mut self, total_records: usize) -> Self {
        self.total_records = total_records;
        self
    }

    /// Sets the page size choices.
    pub fn with_rows_per_page_options(mut self, options: Vec<usize>) -> Self {
        self.rows_per_page_options = options;
        self
    }

    /// Number of pages, zero when the page size is unknown.
    pub fn page_count(&self) -> usize {
        if self.rows == 0 {
            return 0;
        }
        self.total_records.div_ceil(self.rows)
    }

    /// Zero-based index of the current page.
    pub fn current_page(&self) -> usize {
        if self.rows == 0 {
            return 0;
        }
        self.first / self.rows
    }

    /// Returns `true` if a page after the current one exists.
    pub fn has_next(&self) -> bool {
        self.current_page() + 1 < self.page_count()
    }

    /// Paginator state for jumping to `page`, clamped to the last page.
    pub fn state_for_page(&self, page: usize) -> PaginatorState {
        let page_count = self.page_count();
        let page = page.min(page_count.saturating_sub(1));
        PaginatorState {
            first: page * self.rows,
            rows: self.rows,
            page,
            page_count,
        }
    }
}
