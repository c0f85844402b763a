//! State for the feed.

use std::collections::BTreeSet;

use crate::source::Item;
use crate::ui::mvi::UiState;

/// Loader state: everything the feed view needs, plus bookkeeping.
///
/// `items` is append-only. `page` only moves forward. `loading()` is derived
/// from the set of outstanding fetches, so it cannot disagree with it.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    /// Items in load order.
    pub items: Vec<Item>,
    /// Current page (1-based).
    pub page: u32,
    /// Pages with a fetch that has not settled yet.
    pub in_flight: BTreeSet<u32>,
    /// Number of fetches that failed. Failed pages are never retried.
    pub failed_fetches: usize,
    /// Most recent failure, for diagnostics. Not rendered.
    pub last_failure: Option<FetchFailure>,
}

/// A page whose fetch failed, with the error text the loader logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub page: u32,
    pub message: String,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            in_flight: BTreeSet::new(),
            failed_fetches: 0,
            last_failure: None,
        }
    }
}

impl UiState for FeedState {}

impl FeedState {
    /// True while at least one fetch is outstanding.
    pub fn loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
