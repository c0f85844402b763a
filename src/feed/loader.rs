//! Page loader: runs one fetch per page change and reports back as intents.

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::source::PageSource;
use crate::ui::feed::FeedIntent;

/// Spawns page fetches against a [`PageSource`].
///
/// The loader never touches feed state. Each fetch posts `PageLoaded` or
/// `FetchFailed`, then always `FetchSettled`. The settle intent is sent from a
/// drop guard, so it also fires if the fetch panics or the task is aborted.
///
/// There is no in-flight guard and no cancellation: triggering page 3 while
/// page 2 is outstanding runs both, and whichever finishes first is appended
/// first.
pub struct PageLoader<S> {
    source: Arc<S>,
    intents: UnboundedSender<FeedIntent>,
}

impl<S: PageSource> PageLoader<S> {
    pub fn new(source: Arc<S>, intents: UnboundedSender<FeedIntent>) -> Self {
        Self { source, intents }
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Start fetching `page` on the current tokio runtime.
    ///
    /// The caller is expected to have dispatched `FetchStarted { page }`
    /// already. If the feed has gone away by the time the fetch settles, the
    /// results are dropped silently.
    pub fn trigger(&self, page: u32) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let intents = self.intents.clone();
        tracing::debug!(page, "Fetching page");

        tokio::spawn(async move {
            let intents = scopeguard::guard(intents, move |intents| {
                if intents.send(FeedIntent::FetchSettled { page }).is_err() {
                    tracing::trace!(page, "FetchSettled dropped (feed closed)");
                }
            });

            let outcome = match source.fetch_page(page).await {
                Ok(items) => {
                    tracing::debug!(page, count = items.len(), "Page loaded");
                    FeedIntent::PageLoaded { page, items }
                }
                Err(err) => {
                    tracing::error!(
                        page,
                        error_type = err.error_type(),
                        "Error fetching data: {}",
                        err
                    );
                    FeedIntent::FetchFailed {
                        page,
                        message: err.to_string(),
                    }
                }
            };

            if intents.send(outcome).is_err() {
                tracing::trace!(page, "Fetch outcome dropped (feed closed)");
            }
        })
    }
}

impl<S> fmt::Debug for PageLoader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageLoader")
            .field("closed", &self.intents.is_closed())
            .finish()
    }
}
