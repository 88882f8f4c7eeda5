//! Pagination window calculator and the page cursor used by the blog view.
//!
//! # Window rules
//!
//! For current page `P` and total pages `T`:
//!
//! 1. The window holds `min(5, T)` page numbers.
//! 2. While `P ≤ 3` or `T ≤ 5` it is simply `1..=min(5, T)`.
//! 3. Otherwise it is centred on `P` (`P-2 ..= P+2`) and slid down as a whole
//!    when it would run past `T`, so it always ends at or before `T`.
//! 4. A trailing ellipsis with a jump-to-last control is shown when `T > 5`
//!    and `P < T - 2`, i.e. when the last page is not already in reach.

/// Maximum number of page buttons rendered at once.
pub const WINDOW_WIDTH: u32 = 5;

/// Total pages assumed before the first response arrives.
pub const INITIAL_TOTAL_PAGES: u32 = 10;

/// The strip of page controls to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationWindow {
    pub current: u32,
    pub total: u32,
    /// Ascending, contiguous page numbers, at most [`WINDOW_WIDTH`] long.
    pub pages: Vec<u32>,
    /// Show `…` followed by a button for the last page.
    pub show_last: bool,
}

impl PaginationWindow {
    /// Compute the window for `current` of `total` pages.
    ///
    /// Both inputs are treated as at least 1. `current` is not required to be
    /// within `total`; the window is then placed as if `current == total` and
    /// still stays inside `1..=total`.
    pub fn compute(current: u32, total: u32) -> Self {
        let current = current.max(1);
        let total = total.max(1);
        let size = WINDOW_WIDTH.min(total);
        let anchor = current.min(total);

        let first = if anchor <= 3 || total <= WINDOW_WIDTH {
            1
        } else {
            let centred = anchor - 2;
            if u64::from(centred) + u64::from(size - 1) > u64::from(total) {
                total - (size - 1)
            } else {
                centred
            }
        };

        Self {
            current,
            total,
            pages: (first..=first + (size - 1)).collect(),
            show_last: total > WINDOW_WIDTH && current.saturating_add(2) < total,
        }
    }

    pub fn is_current(&self, page: u32) -> bool {
        page == self.current
    }
}

/// Number of pages needed for `total_count` items at `per_page` each.
/// Never less than 1.
pub fn total_pages(total_count: u64, per_page: u32) -> u32 {
    let per_page = u64::from(per_page.max(1));
    let pages = total_count.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Current page plus the bounds it moves within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: u32,
    total_pages: u32,
    per_page: u32,
}

impl Pager {
    pub fn new(per_page: u32) -> Self {
        Self {
            current: 1,
            total_pages: INITIAL_TOTAL_PAGES,
            per_page: per_page.max(1),
        }
    }

    /// Start on a page other than the first. Only the lower bound is
    /// enforced: the real page count is unknown until the first response.
    pub fn starting_at(mut self, page: u32) -> Self {
        self.current = page.max(1);
        self
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    /// Update the page count from a total item count, pulling the current
    /// page back inside the new range.
    pub fn set_total_count(&mut self, total_count: u64) {
        self.total_pages = total_pages(total_count, self.per_page);
        self.current = self.current.min(self.total_pages);
    }

    /// Step back one page. Returns whether the page changed.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Step forward one page. Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Go to `page`, clamped to `1..=total_pages`. Returns whether the page
    /// changed.
    pub fn jump(&mut self, page: u32) -> bool {
        let target = page.clamp(1, self.total_pages);
        if target == self.current {
            return false;
        }
        self.current = target;
        true
    }

    pub fn window(&self) -> PaginationWindow {
        PaginationWindow::compute(self.current, self.total_pages)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
