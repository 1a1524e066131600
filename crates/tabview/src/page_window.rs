//! Page-window layout for pager controls.
//!
//! Given the current page, the total page count, and how many slots the pager
//! may show, [`window`] computes the exact sequence of page buttons and
//! ellipses to render. The layout is deterministic, contains no duplicate or
//! out-of-range page numbers, and always includes the first and last page
//! when the list is truncated.
//!
//! # Example
//!
//! ```rust
//! use tabview::page_window::{window, PageItem};
//!
//! let items = window(10, 20, 7);
//! assert_eq!(items.first(), Some(&PageItem::Page(1)));
//! assert_eq!(items.last(), Some(&PageItem::Page(20)));
//! assert!(items.contains(&PageItem::Ellipsis));
//! ```

use serde::{Deserialize, Serialize};

/// One entry in a pager layout: a clickable page number or an elision marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    /// A page button (1-indexed).
    Page(usize),
    /// A gap between non-adjacent page buttons.
    Ellipsis,
}

impl std::fmt::Display for PageItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => write!(f, "…"),
        }
    }
}

/// Computes the pager layout for `current_page` of `total_pages`, showing at
/// most `max_visible` page buttons.
///
/// Inputs are normalized rather than rejected: `total_pages` is raised to at
/// least 1, `max_visible` to at least 3, and `current_page` is clamped into
/// `[1, total_pages]`.
///
/// When everything fits (`total_pages <= max_visible`) all pages are listed
/// with no ellipsis. Otherwise a window of `max_visible - 2` pages is
/// centered on the current page and clamped to the page range; the first and
/// last page are added outside the window, with an ellipsis wherever the gap
/// spans more than one page.
#[must_use]
pub fn window(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<PageItem> {
    let total = total_pages.max(1);
    let max_visible = max_visible.max(3);
    let current = current_page.clamp(1, total);

    if total <= max_visible {
        return (1..=total).map(PageItem::Page).collect();
    }

    // First and last page are reserved; the rest of the slots form a window
    // centered on the current page.
    let window_size = (max_visible - 2) as i64;
    let half = window_size / 2;
    let total_i = total as i64;
    let mut start = current as i64 - half;
    let mut end = current as i64 + half;

    if start < 1 {
        start = 1;
        end = start + window_size - 1;
    }
    if end > total_i {
        end = total_i;
        start = end - window_size + 1;
    }

    let mut items = Vec::with_capacity(max_visible + 2);
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    for n in start..=end {
        items.push(PageItem::Page(n as usize));
    }
    if end < total_i {
        if end < total_i - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total));
    }
    items
}
