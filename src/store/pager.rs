//! Page navigation state for the storefront.

/// Default number of agents requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// How many numbered page links the control strip shows at once.
const WINDOW: u32 = 5;

/// Pagination state reconciled from the count endpoint and page fetches.
///
/// `total_count == 0` doubles as "unknown". The upstream may legitimately
/// be empty, but both cases render the same way (from the items actually
/// received), so the ambiguity never surfaces.
#[derive(Debug, Clone)]
pub struct Pager {
    current_page: u32,
    page_size: u32,
    total_count: u64,
}

impl Pager {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_count: 0,
        }
    }

    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// True once a non-zero total has been reconciled from any source.
    #[must_use]
    pub fn has_count(&self) -> bool {
        self.total_count > 0
    }

    /// Derived page count, never below 1.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_count.div_ceil(u64::from(self.page_size));
        pages.clamp(1, u64::from(u32::MAX)) as u32
    }

    /// Record a reconciled total. Zero is recorded as-is and keeps the
    /// pager in its "unknown" posture.
    pub fn record_count(&mut self, count: u64) {
        self.total_count = count;
    }

    /// Jump to an arbitrary page.
    ///
    /// Clamped into `[1, total_pages]` once the count is known; with no
    /// count yet only the lower bound applies, so deep links past the end
    /// still resolve to a fetchable page.
    pub fn goto(&mut self, page: u32) {
        self.current_page = if self.has_count() {
            page.clamp(1, self.total_pages())
        } else {
            page.max(1)
        };
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.current_page -= 1;
        }
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Whether the navigation strip should render at all.
    ///
    /// Shown for multi-page catalogs, and also whenever the current page
    /// returned items even though the count claims zero; inconsistent
    /// upstream data must not strand the user without controls.
    #[must_use]
    pub fn controls_visible(&self, items_on_page: usize) -> bool {
        self.total_pages() > 1 || items_on_page > 0
    }

    /// The numbered links to render: up to five pages around the current
    /// one, clamped to the ends of the range.
    #[must_use]
    pub fn page_window(&self) -> PageWindow {
        let total = self.total_pages();
        let start = self.current_page.saturating_sub(2).max(1);
        let end = (start + WINDOW - 1).min(total);
        let start = end.saturating_sub(WINDOW - 1).max(1);

        PageWindow {
            pages: (start..=end).collect(),
            leading_gap: start > 1,
            trailing_gap: end < total,
        }
    }
}

/// Numbered links plus ellipsis flags for the control strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Page numbers to render, ascending, current page included.
    pub pages: Vec<u32>,
    /// An ellipsis (after the first-page anchor) precedes the window.
    pub leading_gap: bool,
    /// An ellipsis (before the last-page anchor) follows the window.
    pub trailing_gap: bool,
}
