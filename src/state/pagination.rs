/// Client-side pagination over the loaded order collection
///
/// Nothing here is stored: the visible window is recomputed from the
/// collection length, the page size and the requested page every time,
/// so the current page is always inside `[1, total_pages]`.

use std::ops::Range;

/// Rows shown per page unless the config says otherwise
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// A navigation request from the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
    Page(usize),
}

/// The slice of the collection visible on one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based current page, clamped
    pub page: usize,
    pub total_pages: usize,
    /// Indices into the full collection
    pub range: Range<usize>,
}

impl PageWindow {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Serial number of the first visible row
    pub fn first_serial(&self) -> usize {
        self.range.start + 1
    }
}

/// `ceil(total / page_size)`; a page size of zero is treated as one
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `[1, total_pages]`, or 1 for an empty collection
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    let pages = total_pages(total, page_size);
    if pages == 0 {
        1
    } else {
        page.clamp(1, pages)
    }
}

/// Compute the visible window for `page`
pub fn window(total: usize, page_size: usize, page: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let page = clamp_page(page, total, page_size);
    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);

    PageWindow {
        page,
        total_pages: total_pages(total, page_size),
        range: start..end,
    }
}

/// Apply a navigation request to the current page.
///
/// Previous/Next are no-ops at their boundary; everything clamps.
pub fn navigate(current: usize, nav: PageNav, total: usize, page_size: usize) -> usize {
    let current = clamp_page(current, total, page_size);
    let last = total_pages(total, page_size).max(1);

    let target = match nav {
        PageNav::First => 1,
        PageNav::Previous => current.saturating_sub(1),
        PageNav::Next => current + 1,
        PageNav::Last => last,
        PageNav::Page(n) => n,
    };

    clamp_page(target, total, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        for n in 0..50 {
            assert_eq!(total_pages(n, 6), (n + 5) / 6, "n = {n}");
        }
    }

    #[test]
    fn test_thirteen_orders_make_three_pages() {
        assert_eq!(total_pages(13, DEFAULT_PAGE_SIZE), 3);

        let last = window(13, DEFAULT_PAGE_SIZE, 3);
        assert_eq!(last.range, 12..13);
        assert_eq!(last.first_serial(), 13);
        assert!(!last.has_next());
        assert!(last.has_previous());

        let first = window(13, DEFAULT_PAGE_SIZE, 1);
        assert_eq!(first.range, 0..6);
        assert!(!first.has_previous());
    }

    #[test]
    fn test_page_is_always_clamped() {
        for n in 0..30 {
            let pages = total_pages(n, 6);
            for requested in 0..10 {
                let w = window(n, 6, requested);
                if n == 0 {
                    assert_eq!(w.page, 1);
                    assert!(w.range.is_empty());
                } else {
                    assert!((1..=pages).contains(&w.page), "n = {n}, requested = {requested}");
                    assert!(w.range.end <= n);
                    assert!(!w.range.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_boundary_navigation_is_a_no_op() {
        assert_eq!(navigate(1, PageNav::Previous, 13, 6), 1);
        assert_eq!(navigate(3, PageNav::Next, 13, 6), 3);
        assert_eq!(navigate(2, PageNav::Next, 13, 6), 3);
        assert_eq!(navigate(2, PageNav::Previous, 13, 6), 1);
    }

    #[test]
    fn test_first_and_last_are_idempotent() {
        assert_eq!(navigate(1, PageNav::First, 13, 6), 1);
        assert_eq!(navigate(3, PageNav::First, 13, 6), 1);
        assert_eq!(navigate(3, PageNav::Last, 13, 6), 3);
        assert_eq!(navigate(1, PageNav::Last, 13, 6), 3);
    }

    #[test]
    fn test_page_n_clamps() {
        assert_eq!(navigate(1, PageNav::Page(2), 13, 6), 2);
        assert_eq!(navigate(1, PageNav::Page(9), 13, 6), 3);
        assert_eq!(navigate(2, PageNav::Page(0), 13, 6), 1);
    }

    #[test]
    fn test_empty_collection_stays_on_page_one() {
        for nav in [PageNav::First, PageNav::Previous, PageNav::Next, PageNav::Last, PageNav::Page(4)] {
            assert_eq!(navigate(1, nav, 0, 6), 1);
        }
        assert_eq!(window(0, 6, 1).total_pages, 0);
    }
}
