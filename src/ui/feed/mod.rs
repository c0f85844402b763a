//! Feed feature module.
//!
//! The paginated list: accumulated items, page counter and loading flag.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Loader state (items, page, outstanding fetches)
//! - `intent.rs` - Scroll and fetch events
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::FeedIntent;
pub use reducer::FeedReducer;
pub use state::{FeedState, FetchFailure};
pub use view::{document_rows, feed_lines, FeedView, LOADING_TEXT};
