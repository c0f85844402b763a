//! Infinite-scroll plumbing that is independent of the terminal.
//!
//! ```text
//! ScrollSignal ──→ ScrollSentinel ──AdvancePage──→ FeedReducer
//!                                                      │ page changed
//!                  FeedReducer ←──PageLoaded/…── PageLoader ←┘
//! ```
//!
//! Everything flows as [`FeedIntent`](crate::ui::feed::FeedIntent) values over
//! one channel, so state is only ever touched by the UI loop.

mod loader;
mod sentinel;
mod signal;

pub use loader::PageLoader;
pub use sentinel::{ScrollMetrics, ScrollSentinel, TriggerMode, BOTTOM_THRESHOLD_PX};
pub use signal::{ScrollListener, ScrollSignal, ScrollSignalSource, Subscription};
