//! Pagination over already-fetched collections.
//!
//! Table views page through the in-memory record set the REST layer handed
//! over; nothing here re-queries a backend.

use serde::{Deserialize, Serialize};

/// Request parameters for a page of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageRequest {
    /// Creates a request, clamping page and page size to at least 1.
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Index of the first row on this page.
    #[must_use]
    pub fn offset(&self) -> usize {
        let page = usize::try_from(self.page.saturating_sub(1)).unwrap_or(usize::MAX);
        page.saturating_mul(self.limit())
    }

    /// Maximum number of rows on this page.
    #[must_use]
    pub fn limit(&self) -> usize {
        usize::try_from(self.per_page.max(1)).unwrap_or(usize::MAX)
    }

    /// Borrows the rows of `items` that fall on this page.
    ///
    /// A page past the end yields no rows but still reports the real totals.
    #[must_use]
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> PageResponse<&'a T> {
        let data = items.iter().skip(self.offset()).take(self.limit()).collect();
        PageResponse::new(data, self.page, self.per_page.max(1), items.len())
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items in the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: u32,
}

impl<T> PageResponse<T> {
    /// Creates a new paginated response.
    #[must_use]
    pub fn new(data: Vec<T>, page: u32, per_page: u32, total: usize) -> Self {
        let per_page_rows = usize::try_from(per_page.max(1)).unwrap_or(usize::MAX);
        let total_pages = if total == 0 {
            1
        } else {
            u32::try_from(total.div_ceil(per_page_rows)).unwrap_or(u32::MAX)
        };

        Self {
            data,
            meta: PageMeta {
                page,
                per_page,
                total,
                total_pages,
            },
        }
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
