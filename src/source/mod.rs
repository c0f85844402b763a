//! Page sources: where the feed gets its items from.
//!
//! A source answers one question: "give me page N". The loader does not care
//! whether that is an HTTP endpoint or a closure in a test.

mod error;
mod http;
mod item;

use std::future::Future;

pub use error::FetchError;
pub use http::{HttpPageSource, DEFAULT_ENDPOINT, DEFAULT_PAGE_SIZE};
pub use item::{Item, ItemId};

/// Fetches one page of items.
///
/// Pages are 1-based. Implementations own their timeouts; the loader never
/// cancels or times out a fetch.
pub trait PageSource: Send + Sync + 'static {
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<Vec<Item>, FetchError>> + Send;
}

/// Any `Fn(page) -> Future` works as a source.
impl<F, Fut> PageSource for F
where
    F: Fn(u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<Item>, FetchError>> + Send,
{
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<Vec<Item>, FetchError>> + Send {
        self(page)
    }
}
