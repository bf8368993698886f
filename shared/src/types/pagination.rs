//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Listing search pages hold at most this many items.
pub const PAGE_SIZE: u32 = 10;

/// A requested page window over a filtered listing query.
///
/// The page size is fixed at [`PAGE_SIZE`]; only the page number varies.
/// Page numbers are 1-indexed and anything that does not parse as a
/// positive integer falls back to page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Current page number (1-indexed)
    pub page: u32,
}

impl PageRequest {
    /// Create a page request, clamping zero to the first page
    pub fn new(page: u32) -> Self {
        Self { page: page.max(1) }
    }

    /// Parse a raw query parameter leniently.
    ///
    /// Absent or non-numeric values yield page 1 rather than an error,
    /// matching the permissive-filter contract of the search endpoint.
    pub fn from_param(raw: Option<&str>) -> Self {
        let page = raw
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(1);
        Self::new(page)
    }

    /// Calculate the offset for database queries
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(PAGE_SIZE)
    }

    /// Get the limit for database queries
    pub fn limit(&self) -> u64 {
        u64::from(PAGE_SIZE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Paginated response wrapper for the listing search endpoint.
///
/// Serialized field names match the public API contract:
/// `{"totalPages": .., "currentPage": .., "result": [..]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    /// Total number of pages for the matching set
    #[serde(rename = "totalPages")]
    pub total_pages: u32,

    /// The page that was requested
    #[serde(rename = "currentPage")]
    pub current_page: u32,

    /// The page slice (at most [`PAGE_SIZE`] items)
    pub result: Vec<T>,
}

impl<T> PagedResponse<T> {
    /// Create a paginated response from a page slice and the total match count.
    ///
    /// `total_pages` is `ceil(total / PAGE_SIZE)`; a page past the end simply
    /// carries an empty `result`.
    pub fn new(result: Vec<T>, page: PageRequest, total: u64) -> Self {
        Self {
            total_pages: Self::calculate_total_pages(total),
            current_page: page.page,
            result,
        }
    }

    fn calculate_total_pages(total: u64) -> u32 {
        total.div_ceil(u64::from(PAGE_SIZE)) as u32
    }

    /// Transform the page items using a function
    pub fn map<U, F>(self, f: F) -> PagedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResponse {
            total_pages: self.total_pages,
            current_page: self.current_page,
            result: self.result.into_iter().map(f).collect(),
        }
    }
}
