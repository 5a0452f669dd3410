//! Client-side pagination over an in-memory list.

/// Page sizes offered by the pagination footer.
pub const PAGE_SIZES: [usize; 4] = [25, 50, 75, 100];

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = PAGE_SIZES[0];

/// Current page, page size, and total count for one paginated list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    /// 1-based current page.
    page: usize,
    /// Rows per page, always at least 1.
    page_size: usize,
    /// Total number of rows in the backing list.
    count: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// Create a paginator on page 1 with the given page size (minimum 1).
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: if page_size == 0 { 1 } else { page_size },
            count: 0,
        }
    }

    /// Current 1-based page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total rows in the backing list.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Number of pages; never less than 1 so an empty list still has a page.
    #[must_use]
    pub const fn num_pages(&self) -> usize {
        if self.count == 0 {
            1
        } else {
            self.count.div_ceil(self.page_size)
        }
    }

    /// What: Record the backing list length.
    ///
    /// Inputs:
    /// - `count`: New total row count.
    ///
    /// Details:
    /// - Clamps the current page so a shrinking list never leaves the view past the end.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.page = self.page.clamp(1, self.num_pages());
    }

    /// Jump to `page`, clamped into `1..=num_pages`.
    pub fn handle_page_change(&mut self, page: usize) {
        self.page = page.clamp(1, self.num_pages());
    }

    /// Change the page size and return to page 1.
    pub fn handle_page_size_change(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Advance one page if possible. Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        let before = self.page;
        self.handle_page_change(self.page + 1);
        self.page != before
    }

    /// Go back one page if possible. Returns whether the page changed.
    pub fn prev_page(&mut self) -> bool {
        let before = self.page;
        self.handle_page_change(self.page.saturating_sub(1));
        self.page != before
    }

    /// What: Switch to the next entry of [`PAGE_SIZES`], wrapping around.
    ///
    /// Details:
    /// - A page size outside the list restarts at the smallest size.
    pub fn cycle_page_size(&mut self) {
        let next = PAGE_SIZES
            .iter()
            .position(|s| *s == self.page_size)
            .map_or(PAGE_SIZES[0], |i| PAGE_SIZES[(i + 1) % PAGE_SIZES.len()]);
        self.handle_page_size_change(next);
    }

    /// Index of the first row on the current page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// What: Slice the current page out of `data`.
    ///
    /// Inputs:
    /// - `data`: Full backing list.
    ///
    /// Output:
    /// - Rows of the current page in their original order; empty when out of range.
    #[must_use]
    pub fn slice<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        let start = self.offset().min(data.len());
        let end = (start + self.page_size).min(data.len());
        &data[start..end]
    }

    /// Whether the footer controls are worth showing for this list.
    #[must_use]
    pub fn footer_visible(&self) -> bool {
        self.count > PAGE_SIZES[0]
    }
}
