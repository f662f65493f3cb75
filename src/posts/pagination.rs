//! Page-number pagination for post listings.
//!
//! Requested page numbers are always resolved to a valid page: values
//! below 1 or non-numeric input fall back to page 1, and values past
//! the end are clamped to the last page.

use serde::Serialize;

/// Default number of posts per listing page.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Computes page counts and offsets for a fixed page size.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    page_size: u64,
}

impl Paginator {
    /// Create a paginator. A page size of 0 is treated as the default.
    pub fn new(page_size: u64) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Self { page_size }
    }

    /// Number of items per page.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Total number of pages for `total` items.
    ///
    /// An empty listing still has one (empty) page.
    pub fn page_count(&self, total: u64) -> u64 {
        if total == 0 {
            return 1;
        }
        total.div_ceil(self.page_size)
    }

    /// Resolve a requested page number against the total item count.
    ///
    /// Missing or out-of-range requests never fail: anything below 1
    /// becomes 1, anything past the last page becomes the last page.
    pub fn resolve(&self, requested: Option<u64>, total: u64) -> u64 {
        let last = self.page_count(total);
        match requested {
            None | Some(0) => 1,
            Some(n) if n > last => last,
            Some(n) => n,
        }
    }

    /// Offset of the first item on the given (1-based) page.
    pub fn offset(&self, page: u64) -> u64 {
        page.saturating_sub(1) * self.page_size
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One page of a listing, with position metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// Items on this page, in listing order.
    pub items: Vec<T>,
    /// 1-based page number.
    pub number: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
}

impl<T> Page<T> {
    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        let p = Paginator::new(10);
        assert_eq!(p.page_count(0), 1);
        assert_eq!(p.page_count(1), 1);
        assert_eq!(p.page_count(10), 1);
        assert_eq!(p.page_count(11), 2);
        assert_eq!(p.page_count(13), 2);
        assert_eq!(p.page_count(20), 2);
        assert_eq!(p.page_count(21), 3);
    }

    #[test]
    fn test_resolve_defaults_to_first_page() {
        let p = Paginator::new(10);
        assert_eq!(p.resolve(None, 25), 1);
        assert_eq!(p.resolve(Some(0), 25), 1);
    }

    #[test]
    fn test_resolve_clamps_to_last_page() {
        let p = Paginator::new(10);
        assert_eq!(p.resolve(Some(99), 25), 3);
        assert_eq!(p.resolve(Some(3), 25), 3);
        assert_eq!(p.resolve(Some(2), 25), 2);
    }

    #[test]
    fn test_resolve_empty_listing() {
        let p = Paginator::new(10);
        assert_eq!(p.resolve(None, 0), 1);
        assert_eq!(p.resolve(Some(5), 0), 1);
    }

    #[test]
    fn test_offset() {
        let p = Paginator::new(10);
        assert_eq!(p.offset(1), 0);
        assert_eq!(p.offset(2), 10);
        assert_eq!(p.offset(3), 20);
    }

    #[test]
    fn test_zero_page_size_uses_default() {
        let p = Paginator::new(0);
        assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_navigation_flags() {
        let page = Page {
            items: vec![1, 2, 3],
            number: 2,
            total_pages: 3,
            total_items: 25,
        };
        assert!(page.has_previous());
        assert!(page.has_next());

        let first = Page {
            items: vec![1],
            number: 1,
            total_pages: 1,
            total_items: 1,
        };
        assert!(!first.has_previous());
        assert!(!first.has_next());
    }
}
