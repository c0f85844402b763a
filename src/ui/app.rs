use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::config::ScrollConfig;
use crate::feed::{PageLoader, ScrollMetrics, ScrollSentinel, ScrollSignal, Subscription};
use crate::source::PageSource;
use crate::ui::feed::{document_rows, FeedIntent, FeedReducer, FeedState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Rows moved per mouse wheel notch.
pub const WHEEL_ROWS: usize = 3;

/// The feed screen: loader state, viewport position and the sentinel wiring.
///
/// All mutation happens through `&mut self` on the UI loop. Background fetches
/// only ever reach this struct as [`FeedIntent`]s passed to
/// [`dispatch_feed`](Self::dispatch_feed).
pub struct App<S> {
    should_quit: bool,
    /// Loader state (MVI pattern).
    feed: FeedState,
    /// Fetch runner (resource, managed outside MVI).
    loader: PageLoader<S>,
    intents: UnboundedSender<FeedIntent>,
    scroll_signal: ScrollSignal,
    scroll_config: ScrollConfig,
    /// Present while mounted. Dropping it detaches the sentinel.
    sentinel: Option<Subscription>,
    /// First visible row.
    scroll_top: usize,
    viewport_rows: u16,
}

impl<S> App<S> {
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn is_mounted(&self) -> bool {
        self.sentinel.is_some()
    }

    /// Signal the view emits on every scroll input.
    pub fn scroll_signal(&self) -> &ScrollSignal {
        &self.scroll_signal
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    pub fn on_resize(&mut self, viewport_rows: u16) {
        self.viewport_rows = viewport_rows;
        self.scroll_top = self.scroll_top.min(self.max_scroll_top());
    }

    /// Viewport geometry in nominal pixels.
    pub fn scroll_metrics(&self) -> ScrollMetrics {
        let row_height = self.scroll_config.row_height_px;
        let to_px = |rows: usize| u32::try_from(rows).unwrap_or(u32::MAX).saturating_mul(row_height);
        ScrollMetrics::new(
            to_px(document_rows(&self.feed)),
            to_px(self.scroll_top),
            to_px(usize::from(self.viewport_rows)),
        )
    }

    fn max_scroll_top(&self) -> usize {
        document_rows(&self.feed).saturating_sub(usize::from(self.viewport_rows))
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_to(self.scroll_top.saturating_sub(rows));
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_to(self.scroll_top.saturating_add(rows));
    }

    pub fn scroll_page_up(&mut self) {
        self.scroll_up(usize::from(self.viewport_rows.max(1)));
    }

    pub fn scroll_page_down(&mut self) {
        self.scroll_down(usize::from(self.viewport_rows.max(1)));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(usize::MAX);
    }

    /// Move the viewport and publish a scroll signal.
    ///
    /// The signal goes out even when the offset is already clamped, so
    /// pressing Down at the end of the list still reaches the sentinel.
    fn scroll_to(&mut self, row: usize) {
        self.scroll_top = row.min(self.max_scroll_top());
        self.scroll_signal.emit(self.scroll_metrics());
    }
}

impl<S: PageSource> App<S> {
    pub fn new(
        source: Arc<S>,
        scroll_config: &ScrollConfig,
        intents: UnboundedSender<FeedIntent>,
    ) -> Self {
        Self {
            should_quit: false,
            feed: FeedState::default(),
            loader: PageLoader::new(source, intents.clone()),
            intents,
            scroll_signal: ScrollSignal::new(),
            scroll_config: scroll_config.clone(),
            sentinel: None,
            scroll_top: 0,
            viewport_rows: 0,
        }
    }

    /// Attach the sentinel and fetch the current page. No-op if mounted.
    pub fn mount(&mut self) {
        if self.is_mounted() {
            return;
        }
        let sentinel = ScrollSentinel::new(
            self.scroll_config.threshold_px,
            self.scroll_config.trigger,
        );
        self.sentinel = Some(sentinel.attach(&self.scroll_signal, self.intents.clone()));
        tracing::info!(
            page = self.feed.page,
            trigger = ?self.scroll_config.trigger,
            "Feed mounted"
        );
        self.request_page(self.feed.page);
    }

    /// Detach the sentinel. Outstanding fetches keep running; their results
    /// land in a closed channel once the receiver is gone.
    pub fn unmount(&mut self) {
        if let Some(sentinel) = self.sentinel.take() {
            sentinel.cancel();
            tracing::info!(
                page = self.feed.page,
                items = self.feed.item_count(),
                outstanding = self.feed.in_flight.len(),
                failed = self.feed.failed_fetches,
                last_failure = ?self.feed.last_failure,
                "Feed unmounted"
            );
        }
    }

    /// Apply a feed intent; start a fetch if the page moved.
    pub fn dispatch_feed(&mut self, intent: FeedIntent) {
        let previous_page = self.feed.page;
        dispatch_mvi!(self, feed, FeedReducer, intent);

        if self.feed.page != previous_page && self.is_mounted() {
            tracing::debug!(from = previous_page, to = self.feed.page, "Page advanced");
            self.request_page(self.feed.page);
        }
    }

    fn request_page(&mut self, page: u32) {
        dispatch_mvi!(self, feed, FeedReducer, FeedIntent::FetchStarted { page });
        // Detached: the task reports back through `intents`.
        drop(self.loader.trigger(page));
    }
}
