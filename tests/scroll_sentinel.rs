//! Sentinel behaviour against an injected scroll signal source.

use std::sync::Arc;

use parking_lot::Mutex;
use scrollfeed::feed::{
    ScrollListener, ScrollMetrics, ScrollSentinel, ScrollSignal, ScrollSignalSource,
    Subscription, TriggerMode, BOTTOM_THRESHOLD_PX,
};
use scrollfeed::ui::feed::FeedIntent;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Hand-driven scroll source holding at most one listener.
#[derive(Clone, Default)]
struct ManualScroll {
    listener: Arc<Mutex<Option<ScrollListener>>>,
}

impl ManualScroll {
    fn fire(&self, metrics: ScrollMetrics) {
        if let Some(listener) = self.listener.lock().as_mut() {
            listener(metrics);
        }
    }

    fn is_subscribed(&self) -> bool {
        self.listener.lock().is_some()
    }
}

impl ScrollSignalSource for ManualScroll {
    fn subscribe(&self, listener: ScrollListener) -> Subscription {
        *self.listener.lock() = Some(listener);
        let slot = Arc::clone(&self.listener);
        Subscription::new(move || {
            slot.lock().take();
        })
    }
}

fn advances(rx: &mut UnboundedReceiver<FeedIntent>) -> usize {
    let mut count = 0;
    while let Ok(intent) = rx.try_recv() {
        assert_eq!(intent, FeedIntent::AdvancePage);
        count += 1;
    }
    count
}

/// Metrics whose distance from the bottom is exactly `distance`.
fn at_distance(distance: u32) -> ScrollMetrics {
    ScrollMetrics::new(1000 + distance, 700, 300)
}

#[test]
fn distance_at_or_above_threshold_is_ignored() {
    let scroll = ManualScroll::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _subscription = ScrollSentinel::default().attach(&scroll, tx);

    scroll.fire(at_distance(BOTTOM_THRESHOLD_PX));
    scroll.fire(at_distance(150));
    scroll.fire(at_distance(5000));

    assert_eq!(advances(&mut rx), 0);
}

#[test]
fn each_signal_below_threshold_advances_once() {
    let scroll = ManualScroll::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _subscription = ScrollSentinel::default().attach(&scroll, tx);

    scroll.fire(at_distance(99));
    scroll.fire(at_distance(0));
    scroll.fire(ScrollMetrics::new(100, 0, 400));

    assert_eq!(advances(&mut rx), 3);
}

#[test]
fn custom_threshold_is_respected() {
    let scroll = ManualScroll::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _subscription = ScrollSentinel::new(40, TriggerMode::EverySignal).attach(&scroll, tx);

    scroll.fire(at_distance(60));
    scroll.fire(at_distance(39));

    assert_eq!(advances(&mut rx), 1);
}

#[test]
fn latch_needs_to_leave_the_bottom_before_firing_again() {
    let scroll = ManualScroll::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _subscription =
        ScrollSentinel::new(BOTTOM_THRESHOLD_PX, TriggerMode::Latch).attach(&scroll, tx);

    scroll.fire(at_distance(10));
    scroll.fire(at_distance(10));
    assert_eq!(advances(&mut rx), 1);

    scroll.fire(at_distance(400));
    scroll.fire(at_distance(10));
    assert_eq!(advances(&mut rx), 1);
}

#[test]
fn dropping_subscription_detaches_listener() {
    let scroll = ManualScroll::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let subscription = ScrollSentinel::default().attach(&scroll, tx);
    assert!(scroll.is_subscribed());

    drop(subscription);
    scroll.fire(at_distance(0));

    assert!(!scroll.is_subscribed());
    assert_eq!(advances(&mut rx), 0);
}

#[test]
fn closed_feed_channel_does_not_panic() {
    let signal = ScrollSignal::new();
    let (tx, rx) = mpsc::unbounded_channel();
    let _subscription = ScrollSentinel::default().attach(&signal, tx);
    drop(rx);

    signal.emit(at_distance(0));
    assert_eq!(signal.listener_count(), 1);
}
