//! # Pagination
//!
//! Offset pagination for the invoices table.
//!
//! ```text
//! page:    1          2          3
//!        ┌──────────┬──────────┬──────┐
//! rows:  │ 0 .. 5   │ 6 .. 11  │ 12.. │   offset = (page - 1) × 6
//!        └──────────┴──────────┴──────┘
//! ```
//!
//! Pages are 1-indexed. A page past the end is simply empty.

use serde::{Deserialize, Serialize};

use crate::{ITEMS_PER_PAGE, MAX_PAGE};

/// A request for one page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
}

impl PageRequest {
    /// Creates a request for `page`.
    ///
    /// Pages below 1 are clamped to 1 so the offset is never negative, and
    /// absurdly large pages are clamped to [`MAX_PAGE`].
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::pagination::PageRequest;
    ///
    /// assert_eq!(PageRequest::new(3).offset(), 12);
    /// assert_eq!(PageRequest::new(0).page(), 1);
    /// assert_eq!(PageRequest::new(-4).offset(), 0);
    /// ```
    pub fn new(page: i64) -> Self {
        PageRequest {
            page: page.clamp(1, MAX_PAGE as i64) as u32,
        }
    }

    /// The first page.
    pub const fn first() -> Self {
        PageRequest { page: 1 }
    }

    /// 1-indexed page number.
    #[inline]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Number of rows per page.
    #[inline]
    pub const fn limit(&self) -> u32 {
        ITEMS_PER_PAGE
    }

    /// Number of rows skipped before this page.
    #[inline]
    pub const fn offset(&self) -> u64 {
        (self.page as u64 - 1) * ITEMS_PER_PAGE as u64
    }

    /// The page after this one.
    pub fn next(&self) -> Self {
        PageRequest::new(self.page as i64 + 1)
    }

    /// Bounds of this page within a collection of `len` rows, clipped so
    /// they are always a valid (possibly empty) slice range.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::pagination::PageRequest;
    ///
    /// assert_eq!(PageRequest::new(2).slice_bounds(8), 6..8);
    /// assert_eq!(PageRequest::new(5).slice_bounds(8), 8..8);
    /// ```
    pub fn slice_bounds(&self, len: usize) -> std::ops::Range<usize> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(len);
        let end = start.saturating_add(self.limit() as usize).min(len);
        start..end
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::first()
    }
}

/// How a page count treats a partially filled last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageRounding {
    /// `total / 6`: a partial last page is not counted.
    #[default]
    Floor,
    /// `ceil(total / 6)`: every row lands on a counted page.
    Ceil,
}

/// Number of pages needed for `total` rows.
///
/// ## Example
/// ```rust
/// use acme_core::pagination::{page_count, PageRounding};
///
/// assert_eq!(page_count(12, PageRounding::Floor), 2);
/// assert_eq!(page_count(13, PageRounding::Floor), 2);
/// assert_eq!(page_count(13, PageRounding::Ceil), 3);
/// ```
pub fn page_count(total: i64, rounding: PageRounding) -> i64 {
    let total = total.max(0);
    let per_page = ITEMS_PER_PAGE as i64;

    match rounding {
        PageRounding::Floor => total / per_page,
        PageRounding::Ceil => (total + per_page - 1) / per_page,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
