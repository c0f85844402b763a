//! Reducer for the feed.

use crate::ui::mvi::Reducer;

use super::intent::FeedIntent;
use super::state::{FeedState, FetchFailure};

/// Reducer for feed state transitions.
///
/// Pure function. Starting the fetch for a new page is the caller's job: it
/// compares `page` before and after dispatch.
pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::AdvancePage => {
                state.page = state.page.saturating_add(1);
            }

            FeedIntent::FetchStarted { page } => {
                state.in_flight.insert(page);
            }

            FeedIntent::PageLoaded { items, .. } => {
                // Completion order, not page order.
                state.items.extend(items);
            }

            FeedIntent::FetchFailed { page, message } => {
                state.failed_fetches += 1;
                state.last_failure = Some(FetchFailure { page, message });
            }

            FeedIntent::FetchSettled { page } => {
                state.in_flight.remove(&page);
            }
        }
        state
    }
}
