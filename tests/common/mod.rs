//! Shared test utilities: a page source whose fetches resolve on demand.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use parking_lot::Mutex;
use scrollfeed::config::ScrollConfig;
use scrollfeed::source::{FetchError, Item, PageSource};
use scrollfeed::ui::app::App;
use scrollfeed::ui::feed::FeedIntent;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::sync::oneshot;
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

pub type FetchResult = Result<Vec<Item>, FetchError>;

/// Page source whose fetches stay pending until the test resolves them.
#[derive(Default)]
pub struct ScriptedSource {
    requests: Mutex<Vec<u32>>,
    pending: Mutex<HashMap<u32, oneshot::Sender<FetchResult>>>,
}

impl ScriptedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Pages requested so far, in request order.
    pub fn requests(&self) -> Vec<u32> {
        self.requests.lock().clone()
    }

    pub fn is_pending(&self, page: u32) -> bool {
        self.pending.lock().contains_key(&page)
    }

    /// Complete the outstanding fetch for `page`.
    pub fn resolve(&self, page: u32, result: FetchResult) {
        let sender = self
            .pending
            .lock()
            .remove(&page)
            .unwrap_or_else(|| panic!("no outstanding fetch for page {}", page));
        let _ = sender.send(result);
    }

    pub fn succeed(&self, page: u32, items: Vec<Item>) {
        self.resolve(page, Ok(items));
    }

    pub fn fail(&self, page: u32, message: &str) {
        self.resolve(
            page,
            Err(FetchError::Other {
                page,
                message: message.to_string(),
            }),
        );
    }
}

impl PageSource for ScriptedSource {
    fn fetch_page(&self, page: u32) -> impl Future<Output = FetchResult> + Send {
        let (tx, rx) = oneshot::channel();
        self.requests.lock().push(page);
        self.pending.lock().insert(page, tx);
        async move {
            rx.await.unwrap_or_else(|_| {
                Err(FetchError::Other {
                    page,
                    message: "fetch abandoned".to_string(),
                })
            })
        }
    }
}

/// Let spawned tasks run (single-threaded test runtime).
pub async fn yield_many() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}

/// App wired to a scripted source, plus the feed channel receiver.
pub struct Harness {
    pub app: App<ScriptedSource>,
    pub source: Arc<ScriptedSource>,
    pub intents: UnboundedReceiver<FeedIntent>,
}

impl Harness {
    pub fn new(config: ScrollConfig, viewport_rows: u16) -> Self {
        let source = ScriptedSource::new();
        let (tx, rx) = mpsc::unbounded_channel();
        let mut app = App::new(Arc::clone(&source), &config, tx);
        app.on_resize(viewport_rows);
        Self {
            app,
            source,
            intents: rx,
        }
    }

    /// Run spawned tasks, then dispatch every queued intent, until quiet.
    pub async fn pump(&mut self) {
        loop {
            yield_many().await;
            let mut dispatched = false;
            while let Ok(intent) = self.intents.try_recv() {
                self.app.dispatch_feed(intent);
                dispatched = true;
            }
            if !dispatched {
                break;
            }
        }
    }
}

/// Items `first..=last`, titled and bodied after their id.
pub fn items(ids: std::ops::RangeInclusive<u64>) -> Vec<Item> {
    ids.map(|id| Item::new(id, format!("title {}", id), format!("body {}", id)))
        .collect()
}

/// One log event as seen by [`LogCapture`].
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedEvent {
    pub level: Level,
    pub page: Option<u64>,
    pub message: String,
}

/// Tracing layer that records every event on the current thread.
#[derive(Clone, Default)]
pub struct LogCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl LogCapture {
    /// Route this thread's events here until the guard drops.
    pub fn install(&self) -> DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    pub fn errors(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .iter()
            .filter(|event| event.level == Level::ERROR)
            .cloned()
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = EventFields::default();
        event.record(&mut fields);
        self.events.lock().push(CapturedEvent {
            level: *event.metadata().level(),
            page: fields.page,
            message: fields.message,
        });
    }
}

#[derive(Default)]
struct EventFields {
    page: Option<u64>,
    message: String,
}

impl Visit for EventFields {
    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "page" {
            self.page = Some(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}
