//! Per-page catalog session state.
//!
//! Ownership model:
//! - Each page instance owns exactly one `CatalogSession`; nothing is
//!   shared across pages and nothing persists past the page's lifetime.
//! - Filter-changing transitions re-run the evaluator and reset to page 1.
//! - `GotoPage` only clamps against the cached filtered list; it never
//!   re-evaluates.
//! - After the backing store is replaced (admin create/edit/delete),
//!   `sync` re-derives the cached list from the new snapshot.

use crate::facet::{FacetKey, FacetState};
use crate::page::Paginator;
use crate::query;
use crate::record::ContentRecord;
use crate::types::{FacetValue, QueryText};

/// User-driven transition on a catalog page.
///
/// Every transition is a total function: none can fail, and each produces
/// the page's next (and only) `Idle` state synchronously.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// Toggle a facet selection (re-selecting the active value clears it).
    ActivateFacet(FacetKey, FacetValue),
    /// Clear one facet selection.
    DeactivateFacet(FacetKey),
    /// Replace the free-text query.
    SetQuery(QueryText),
    /// Navigate to a 1-indexed page without touching filters.
    GotoPage(usize),
}

/// Snapshot handed to a renderer after a transition.
#[derive(Clone, Debug)]
pub struct CatalogView<'a> {
    /// Records visible on the current page, in store order.
    pub items: Vec<&'a ContentRecord>,
    /// Size of the full filtered list.
    pub filtered_count: usize,
    /// Current 1-indexed page.
    pub current_page: usize,
    /// Total pages (at least 1, even for zero results).
    pub total_pages: usize,
}

/// Reducer-style filter and pagination state for one catalog page.
#[derive(Clone, Debug)]
pub struct CatalogSession {
    facets: FacetState,
    paginator: Paginator,
    current_page: usize,
    filtered: Vec<usize>,
}

impl CatalogSession {
    /// Session over `records` with `page_size` items per page, starting
    /// unconstrained on page 1.
    pub fn new(records: &[ContentRecord], page_size: usize) -> Self {
        let mut session = Self {
            facets: FacetState::new(),
            paginator: Paginator::new(page_size),
            current_page: 1,
            filtered: Vec::new(),
        };
        session.sync(records);
        session
    }

    /// Current filter selections and query.
    pub fn facet_state(&self) -> &FacetState {
        &self.facets
    }

    /// Current 1-indexed page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total pages for the cached filtered list.
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.filtered.len())
    }

    /// Size of the cached filtered list.
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Apply one transition against the current record snapshot.
    ///
    /// Facet and query transitions re-evaluate and reset to page 1;
    /// `GotoPage` clamps into `[1, total_pages]` using the cached list.
    pub fn apply(&mut self, records: &[ContentRecord], transition: Transition) {
        match transition {
            Transition::ActivateFacet(key, value) => {
                self.facets.toggle(key, value);
                self.refilter(records);
            }
            Transition::DeactivateFacet(key) => {
                self.facets.clear(key);
                self.refilter(records);
            }
            Transition::SetQuery(text) => {
                self.facets.set_query(text);
                self.refilter(records);
            }
            Transition::GotoPage(page) => {
                self.current_page = self.paginator.clamp_page(page, self.filtered.len());
            }
        }
    }

    /// Re-derive the cached filtered list after the record store was
    /// replaced, clamping the current page into the new range.
    pub fn sync(&mut self, records: &[ContentRecord]) {
        self.filtered = query::evaluate_indices(records, &self.facets);
        self.current_page = self
            .paginator
            .clamp_page(self.current_page, self.filtered.len());
    }

    /// Current page of records plus pagination summary for rendering.
    ///
    /// Cached indices that fall outside `records` (store replaced without a
    /// `sync`) are skipped.
    pub fn view<'a>(&self, records: &'a [ContentRecord]) -> CatalogView<'a> {
        let page_indices = self.paginator.page_items(&self.filtered, self.current_page);
        let items = page_indices
            .iter()
            .filter_map(|&idx| records.get(idx))
            .collect();
        CatalogView {
            items,
            filtered_count: self.filtered.len(),
            current_page: self.current_page,
            total_pages: self.total_pages(),
        }
    }

    fn refilter(&mut self, records: &[ContentRecord]) {
        self.filtered = query::evaluate_indices(records, &self.facets);
        self.current_page = 1;
    }
}
