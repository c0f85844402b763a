//! Scroll sentinel: decides when the viewport is close enough to the bottom
//! to load the next page.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

use crate::ui::feed::FeedIntent;

use super::signal::{ScrollSignalSource, Subscription};

/// Distance from the bottom, in pixels, below which the next page is requested.
pub const BOTTOM_THRESHOLD_PX: u32 = 100;

/// Viewport geometry at the time of a scroll signal.
///
/// All values share one unit (nominal pixels in the terminal view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    /// Height of the whole rendered content.
    pub document_height: u32,
    /// Offset of the top of the viewport into the content.
    pub scroll_top: u32,
    /// Height of the visible region.
    pub viewport_height: u32,
}

impl ScrollMetrics {
    pub fn new(document_height: u32, scroll_top: u32, viewport_height: u32) -> Self {
        Self {
            document_height,
            scroll_top,
            viewport_height,
        }
    }

    /// `document_height - (scroll_top + viewport_height)`.
    ///
    /// Negative when the content is shorter than the viewport.
    pub fn distance_from_bottom(&self) -> i64 {
        i64::from(self.document_height)
            - (i64::from(self.scroll_top) + i64::from(self.viewport_height))
    }
}

/// When a qualifying signal advances the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMode {
    /// Every signal below the threshold advances the page, even if the
    /// previous one was also below it.
    #[default]
    EverySignal,
    /// Advance once per approach: the viewport must move back above the
    /// threshold before another signal can advance the page.
    Latch,
}

/// Threshold check plus the latch state for [`TriggerMode::Latch`].
#[derive(Debug, Clone)]
pub struct ScrollSentinel {
    threshold: u32,
    mode: TriggerMode,
    armed: bool,
}

impl Default for ScrollSentinel {
    fn default() -> Self {
        Self::new(BOTTOM_THRESHOLD_PX, TriggerMode::default())
    }
}

impl ScrollSentinel {
    pub fn new(threshold: u32, mode: TriggerMode) -> Self {
        Self {
            threshold,
            mode,
            armed: true,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    pub fn is_near_bottom(&self, metrics: ScrollMetrics) -> bool {
        metrics.distance_from_bottom() < i64::from(self.threshold)
    }

    /// Feed one scroll signal. Returns true if the page should advance.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        let near = self.is_near_bottom(metrics);
        match self.mode {
            TriggerMode::EverySignal => near,
            TriggerMode::Latch => {
                let fire = near && self.armed;
                self.armed = !near;
                fire
            }
        }
    }

    /// Subscribe to `source`, posting [`FeedIntent::AdvancePage`] for every
    /// signal that qualifies. Dropping the returned subscription detaches.
    pub fn attach<S>(mut self, source: &S, intents: UnboundedSender<FeedIntent>) -> Subscription
    where
        S: ScrollSignalSource + ?Sized,
    {
        source.subscribe(Box::new(move |metrics| {
            if !self.on_scroll(metrics) {
                return;
            }
            tracing::debug!(
                distance = metrics.distance_from_bottom(),
                "Near bottom, advancing page"
            );
            if intents.send(FeedIntent::AdvancePage).is_err() {
                tracing::trace!("AdvancePage dropped (feed closed)");
            }
        }))
    }
}
