//! Fixed-size, 1-indexed pagination.

use core::num::NonZeroUsize;

use storefront_core::{DomainError, DomainResult};

/// Products shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(9) {
    Some(n) => n,
    None => unreachable!(),
};

/// Number of pages needed for `len` items; `0` when there are no items.
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

/// Items of page `k` (1-indexed). Empty when `k` is out of range.
pub fn page<T>(items: &[T], page_size: NonZeroUsize, k: usize) -> &[T] {
    if k == 0 || k > total_pages(items.len(), page_size) {
        return &[];
    }
    let start = (k - 1) * page_size.get();
    let end = (start + page_size.get()).min(items.len());
    &items[start..end]
}

/// Outcome of a page change request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PageChange {
    /// Request was out of range; the current page stays.
    Ignored,
    /// The current page moved; the view should scroll back to the top.
    Moved { page: usize },
}

impl PageChange {
    pub fn scrolls_to_top(self) -> bool {
        matches!(self, PageChange::Moved { .. })
    }
}

/// Current-page state over a sequence whose length can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: NonZeroUsize,
    current: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            current: 1,
        }
    }

    /// Build from an untrusted size (configuration, query strings).
    pub fn with_page_size(page_size: usize) -> DomainResult<Self> {
        NonZeroUsize::new(page_size)
            .map(Self::new)
            .ok_or_else(|| DomainError::validation("page size must be greater than zero"))
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    /// Move to page `k` of a sequence of `len` items, if `k` is in range.
    pub fn change_page(&mut self, k: usize, len: usize) -> PageChange {
        if k < 1 || k > self.total_pages(len) {
            return PageChange::Ignored;
        }
        self.current = k;
        PageChange::Moved { page: k }
    }

    /// Back to page 1. Called whenever the underlying sequence is re-derived.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// The current page's slice of `items`.
    pub fn current_slice<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        page(items, self.page_size, self.current)
    }
}
