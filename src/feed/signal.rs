//! Scroll signal source and RAII subscriptions.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::sentinel::ScrollMetrics;

/// Callback invoked with the viewport geometry on every scroll signal.
pub type ScrollListener = Box<dyn FnMut(ScrollMetrics) + Send>;

/// Anything that can deliver scroll signals.
///
/// The terminal view implements this through [`ScrollSignal`]; tests can
/// supply their own.
pub trait ScrollSignalSource {
    /// Register a listener. It stays registered until the returned
    /// [`Subscription`] is dropped.
    fn subscribe(&self, listener: ScrollListener) -> Subscription;
}

/// Handle to a registered listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new<F: FnOnce() + Send + 'static>(unsubscribe: F) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Unsubscribe now instead of at drop.
    pub fn cancel(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, ScrollListener)>,
}

/// In-process scroll signal: the view emits, subscribers listen.
///
/// Listeners run synchronously inside [`emit`](Self::emit) and must not
/// subscribe or unsubscribe from within the callback.
#[derive(Clone, Default)]
pub struct ScrollSignal {
    inner: Arc<Mutex<Listeners>>,
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one scroll signal to every listener, in subscription order.
    pub fn emit(&self, metrics: ScrollMetrics) {
        let mut listeners = self.inner.lock();
        for (_, listener) in listeners.entries.iter_mut() {
            listener(metrics);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().entries.len()
    }
}

impl ScrollSignalSource for ScrollSignal {
    fn subscribe(&self, listener: ScrollListener) -> Subscription {
        let id = {
            let mut listeners = self.inner.lock();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push((id, listener));
            id
        };

        // Weak so a forgotten subscription does not keep the signal alive.
        let inner: Weak<Mutex<Listeners>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.lock().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }
}

impl fmt::Debug for ScrollSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSignal")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
