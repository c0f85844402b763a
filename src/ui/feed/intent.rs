//! Intents for the feed.

use crate::source::Item;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the feed reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedIntent {
    /// Scroll sentinel saw the viewport near the bottom.
    AdvancePage,

    /// A fetch for `page` is about to start.
    FetchStarted { page: u32 },

    /// Fetch for `page` returned items.
    PageLoaded { page: u32, items: Vec<Item> },

    /// Fetch for `page` failed. Already logged by the loader.
    FetchFailed { page: u32, message: String },

    /// Fetch for `page` is over, whatever the outcome.
    FetchSettled { page: u32 },
}

impl Intent for FeedIntent {}
