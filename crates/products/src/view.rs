//! List view state: the catalog plus the four user-controlled inputs.
//!
//! The pipeline reruns over the full catalog whenever the parameters change;
//! pages and status are read from that result until the next change.

use core::num::NonZeroUsize;

use crate::catalog::Catalog;
use crate::pagination::{PageChange, Paginator};
use crate::product::Product;
use crate::query::{self, SortKey, ViewParams};

/// What the list view should present.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ListStatus {
    /// The catalog could not be fetched.
    Failed,
    /// The catalog loaded but nothing matches the current parameters.
    NoMatches,
    Results,
}

/// One rendered page of the pipeline output.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub items: Vec<&'a Product>,
    /// 1-indexed page number.
    pub number: usize,
    pub total_pages: usize,
    /// Matches across all pages.
    pub total_items: usize,
}

impl Page<'_> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

#[derive(Debug, Clone)]
pub struct ListView {
    catalog: Catalog,
    load_failed: bool,
    params: ViewParams,
    paginator: Paginator,
    /// Pipeline output for `params`, as positions into the catalog.
    matches: Vec<usize>,
}

impl ListView {
    /// View over a fetched catalog, default parameters, page 1.
    pub fn loaded(catalog: Catalog, page_size: NonZeroUsize) -> Self {
        let params = ViewParams::default();
        let matches = query::matching_positions(catalog.products(), &params);
        Self {
            catalog,
            load_failed: false,
            params,
            paginator: Paginator::new(page_size),
            matches,
        }
    }

    /// View for a failed fetch: empty catalog with the error flag set.
    pub fn failed(page_size: NonZeroUsize) -> Self {
        Self {
            load_failed: true,
            ..Self::loaded(Catalog::empty(), page_size)
        }
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn categories(&self) -> &[String] {
        self.catalog.categories()
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    /// Replace all parameters at once. Resets to page 1.
    pub fn set_params(&mut self, params: ViewParams) {
        self.paginator.reset();
        if params == self.params {
            return;
        }
        self.matches = query::matching_positions(self.catalog.products(), &params);
        self.params = params;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        let params = self.params.with_category(category);
        self.set_params(params);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let params = self.params.with_search(search);
        self.set_params(params);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        let params = self.params.with_sort(sort);
        self.set_params(params);
    }

    /// Move to page `k` of the current results if it exists.
    pub fn change_page(&mut self, k: usize) -> PageChange {
        self.paginator.change_page(k, self.matches.len())
    }

    pub fn page(&self) -> Page<'_> {
        Page {
            items: self.resolve(self.paginator.current_slice(&self.matches)),
            number: self.paginator.current_page(),
            total_pages: self.paginator.total_pages(self.matches.len()),
            total_items: self.matches.len(),
        }
    }

    pub fn status(&self) -> ListStatus {
        if self.load_failed {
            ListStatus::Failed
        } else if self.matches.is_empty() {
            ListStatus::NoMatches
        } else {
            ListStatus::Results
        }
    }

    fn resolve(&self, positions: &[usize]) -> Vec<&Product> {
        let products = self.catalog.products();
        positions.iter().map(|&i| &products[i]).collect()
    }
}
