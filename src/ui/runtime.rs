use crate::config::Config;
use crate::source::HttpPageSource;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::sync::Arc;
use tokio::sync::mpsc;

fn viewport_rows(cols: u16, rows: u16) -> u16 {
    body_rect(Rect::new(0, 0, cols, rows)).height
}

/// Run the feed UI until the user quits.
///
/// Single-threaded event loop: terminal input and feed intents are handled
/// one at a time, so state never needs a lock.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let source = Arc::new(HttpPageSource::from_config(&config.source)?);
    let endpoint = source.endpoint().to_string();
    let (intent_tx, mut intent_rx) = mpsc::unbounded_channel();
    let mut app = App::new(source, &config.scroll, intent_tx);

    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new();
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(viewport_rows(cols, rows));
    }
    app.mount();

    loop {
        terminal.draw(|frame| draw(frame, &app, &endpoint))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
                Some(AppEvent::Resize(cols, rows)) => app.on_resize(viewport_rows(cols, rows)),
                None => break,
            },
            Some(intent) = intent_rx.recv() => app.dispatch_feed(intent),
        }
    }

    app.unmount();
    drop(events);
    drop(guard);
    Ok(())
}
