//! Per-dataset table view controller.
//!
//! [`TableView`] composes the engine's pieces into one view model per dataset
//! (or per bucket, when a dataset pages its buckets independently): filtered
//! rows, the current page slice, the total page count, and the pager layout.
//!
//! The controller is recompute-on-read. Replacing the records or committing a
//! search never patches derived state by hand; [`TableView::snapshot`]
//! recomputes everything and self-heals the stored page when the filtered set
//! has shrunk underneath it. Invalid page input is clamped or ignored, never
//! surfaced as an error.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use tabview::filter::field;
//! use tabview::page_window::PageItem;
//! use tabview::table_view::TableView;
//!
//! let records: Vec<u32> = (1..=95).collect();
//! let mut view = TableView::new(records)
//!     .page_size(10)
//!     .accessor(field(|n: &u32| Some(*n)));
//!
//! view.click_page(5.0);
//! let snapshot = view.snapshot();
//! assert_eq!(snapshot.page, 5);
//! assert_eq!(snapshot.total_pages, 10);
//! assert_eq!(snapshot.rows.len(), 10);
//! assert_eq!(snapshot.rows[0], &41);
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::debounce::SearchDebouncer;
use crate::filter::{FieldAccessor, matching_indices};
use crate::page_window::{PageItem, window};

/// Paging and search state for one view instance.
///
/// `page` and `page_size` are always at least 1. The committed query only
/// changes when the debounce idle period elapses (or on explicit submit), and
/// that change always forces `page` back to 1.
#[derive(Debug, Clone)]
pub struct ViewState {
    page: usize,
    page_size: usize,
    raw_search_input: String,
    committed_query: String,
}

impl ViewState {
    /// Creates state on page 1 with the given page size (raised to at least 1).
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            raw_search_input: String::new(),
            committed_query: String::new(),
        }
    }

    /// Current page, 1-indexed.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Raw, not-yet-committed search input (what the search box displays).
    #[must_use]
    pub fn raw_search_input(&self) -> &str {
        &self.raw_search_input
    }

    /// The committed query rows are currently filtered by.
    #[must_use]
    pub fn committed_query(&self) -> &str {
        &self.committed_query
    }
}

/// Read-only view model handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Snapshot<'a, R> {
    /// Rows on the current page, in filtered order.
    pub rows: Vec<&'a R>,
    /// Effective (clamped) current page, 1-indexed.
    pub page: usize,
    /// Total pages; at least 1 even when no rows match.
    pub total_pages: usize,
    /// Total rows matching the committed query, across all pages.
    pub total_rows: usize,
    /// Pager layout for the current page.
    pub page_window: Vec<PageItem>,
    /// Value to display in the search box.
    pub search_input: &'a str,
}

/// Controller for one searched, paginated table.
pub struct TableView<R> {
    records: Vec<R>,
    accessors: Vec<FieldAccessor<R>>,
    state: ViewState,
    debouncer: SearchDebouncer,
    max_visible: usize,
}

impl<R> TableView<R> {
    /// Default rows per page.
    pub const DEFAULT_PAGE_SIZE: usize = 10;
    /// Default maximum page buttons in the pager.
    pub const DEFAULT_MAX_VISIBLE: usize = 7;

    /// Creates a controller over `records` with default settings and no
    /// search accessors.
    #[must_use]
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            accessors: Vec::new(),
            state: ViewState::new(Self::DEFAULT_PAGE_SIZE),
            debouncer: SearchDebouncer::default(),
            max_visible: Self::DEFAULT_MAX_VISIBLE,
        }
    }

    /// Sets the rows per page (raised to at least 1).
    #[must_use]
    pub fn page_size(mut self, n: usize) -> Self {
        self.state.page_size = n.max(1);
        self
    }

    /// Sets the maximum page buttons shown by the pager (raised to at least 3).
    #[must_use]
    pub fn max_visible(mut self, n: usize) -> Self {
        self.max_visible = n.max(3);
        self
    }

    /// Sets the search debounce idle interval.
    #[must_use]
    pub fn debounce_interval(mut self, interval: Duration) -> Self {
        self.debouncer = SearchDebouncer::new(interval);
        self
    }

    /// Adds one search field accessor.
    #[must_use]
    pub fn accessor(mut self, accessor: FieldAccessor<R>) -> Self {
        self.accessors.push(accessor);
        self
    }

    /// Replaces the search field accessors.
    #[must_use]
    pub fn accessors(mut self, accessors: Vec<FieldAccessor<R>>) -> Self {
        self.accessors = accessors;
        self
    }

    /// Replaces the record collection, e.g. after a refetch.
    ///
    /// Paging and search state are kept as-is; if the new collection leaves
    /// the stored page out of range, the next [`Self::snapshot`] clamps it.
    pub fn set_records(&mut self, records: Vec<R>) {
        debug!(count = records.len(), "records replaced");
        self.records = records;
    }

    /// Returns the full, unfiltered record collection.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns the paging and search state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Records a search keystroke at `now`.
    ///
    /// Updates the displayed input immediately and (re)schedules the debounce
    /// commit; the committed query is untouched until the idle interval
    /// elapses.
    pub fn search_input(&mut self, raw: &str, now: Instant) {
        self.state.raw_search_input = raw.to_string();
        self.debouncer.input(raw, now);
    }

    /// Advances the debounce clock to `now`, committing a pending search if
    /// its idle deadline has passed. Returns whether a commit fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(query) => {
                self.commit_query(query);
                true
            }
            None => false,
        }
    }

    /// Commits any pending search immediately (explicit submit). Returns
    /// whether a commit fired.
    pub fn submit_search(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(query) => {
                self.commit_query(query);
                true
            }
            None => false,
        }
    }

    fn commit_query(&mut self, query: String) {
        debug!(query = %query, "search committed, page reset to 1");
        self.state.committed_query = query;
        self.state.page = 1;
    }

    /// Handles a page-button click.
    ///
    /// Non-finite input is ignored; anything else is truncated toward zero
    /// and clamped into `[1, total_pages]`.
    pub fn click_page(&mut self, n: f64) {
        if !n.is_finite() {
            return;
        }
        let total = self.total_pages();
        let n = n.trunc();
        self.state.page = if n < 1.0 {
            1
        } else if n >= total as f64 {
            total
        } else {
            n as usize
        };
    }

    /// Handles free-text page entry ("jump to page").
    ///
    /// Text that does not parse to a finite number is a no-op; otherwise the
    /// value is truncated and clamped exactly like [`Self::click_page`].
    pub fn jump_to_page(&mut self, raw: &str) {
        if let Ok(n) = raw.trim().parse::<f64>() {
            self.click_page(n);
        }
    }

    /// Total pages for the current committed query; at least 1.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.filtered_indices()
            .len()
            .div_ceil(self.state.page_size)
            .max(1)
    }

    fn filtered_indices(&self) -> Vec<usize> {
        matching_indices(&self.records, &self.state.committed_query, &self.accessors)
    }

    /// Recomputes the view model.
    ///
    /// If the filtered set shrank and the stored page now exceeds the total,
    /// the page is clamped and written back, so the view heals without any
    /// explicit user action.
    pub fn snapshot(&mut self) -> Snapshot<'_, R> {
        let filtered = self.filtered_indices();
        let total_pages = filtered.len().div_ceil(self.state.page_size).max(1);

        let effective = self.state.page.min(total_pages);
        if effective != self.state.page {
            debug!(
                from = self.state.page,
                to = effective,
                "stored page out of range, clamping"
            );
            self.state.page = effective;
        }

        let start = (effective - 1) * self.state.page_size;
        let end = (start + self.state.page_size).min(filtered.len());
        let rows = filtered
            .get(start..end)
            .unwrap_or(&[])
            .iter()
            .map(|&index| &self.records[index])
            .collect();

        Snapshot {
            rows,
            page: effective,
            total_pages,
            total_rows: filtered.len(),
            page_window: window(effective, total_pages, self.max_visible),
            search_input: &self.state.raw_search_input,
        }
    }
}
