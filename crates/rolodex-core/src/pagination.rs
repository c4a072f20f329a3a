//! # Pagination
//!
//! Page-and-page-size windowing for the customer list.
//!
//! ```text
//! page = 3, page_size = 10
//!
//!   rows:  0 ........ 9 | 10 ....... 19 | 20 ....... 29
//!          └─ page 1 ──┘ └─ page 2 ───┘ └─ page 3 ───┘
//!                                          ▲
//!                                   OFFSET 20 LIMIT 10
//! ```

use serde::{Deserialize, Serialize};

/// Page used when the client sends none (or an unparsable one).
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the client sends none (or an unparsable one).
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination parameters (1-indexed page).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Page number, starting at 1.
    pub page: u32,
    /// Rows per page, at least 1.
    pub page_size: u32,
}

impl Pagination {
    /// Creates pagination, clamping both values to a minimum of 1.
    ///
    /// A zero page size would make `total_pages` divide by zero.
    pub fn new(page: u32, page_size: u32) -> Self {
        Pagination {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// SQL OFFSET: `(page - 1) * page_size`, saturating at `i64::MAX`.
    ///
    /// A window past the end of the table yields an empty page.
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1).saturating_mul(i64::from(self.page_size))
    }

    /// SQL LIMIT.
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// `ceil(total / page_size)`; zero rows means zero pages.
    pub fn total_pages(&self, total: i64) -> u64 {
        if total <= 0 {
            return 0;
        }
        let total = total as u64;
        let size = u64::from(self.page_size);
        total.div_ceil(size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let page = Pagination::new(1, 10);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);

        let page = Pagination::new(4, 25);
        assert_eq!(page.offset(), 75);
    }

    #[test]
    fn test_clamps_to_minimum() {
        let page = Pagination::new(0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_offset_saturates_for_huge_windows() {
        let page = Pagination::new(u32::MAX, u32::MAX);
        assert_eq!(page.offset(), i64::MAX);
        assert_eq!(page.limit(), i64::from(u32::MAX));
        assert_eq!(page.total_pages(25), 1);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page = Pagination::new(1, 10);
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(1), 1);
        assert_eq!(page.total_pages(10), 1);
        assert_eq!(page.total_pages(11), 2);
        assert_eq!(page.total_pages(25), 3);
    }

    #[test]
    fn test_default() {
        let page = Pagination::default();
        assert_eq!(page.page, DEFAULT_PAGE);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
    }
}
