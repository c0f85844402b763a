//! Feed rendering.
//!
//! A pure projection of [`FeedState`]: one block per item (title, body, blank
//! separator), then a loading line while a fetch is outstanding. Lines are not
//! wrapped, so the row count does not depend on terminal width.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::source::Item;
use crate::ui::theme::{ITEM_BODY, LOADING, MUTED, TEXT};

use super::state::FeedState;

/// Text of the loading indicator.
pub const LOADING_TEXT: &str = "Loading...";

fn item_rows(item: &Item) -> usize {
    // title + body lines + separator
    item.body.lines().count() + 2
}

/// Total rows [`feed_lines`] produces for `state`.
pub fn document_rows(state: &FeedState) -> usize {
    let items: usize = state.items.iter().map(item_rows).sum();
    items + usize::from(state.loading())
}

fn item_lines(item: &Item, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(vec![
        Span::styled(format!("#{} ", item.id), Style::default().fg(MUTED)),
        Span::styled(
            item.title.clone(),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ),
    ]));
    for body_line in item.body.lines() {
        lines.push(Line::from(Span::styled(
            body_line.to_string(),
            Style::default().fg(ITEM_BODY),
        )));
    }
    lines.push(Line::from(""));
}

/// Every row of the feed, top to bottom.
pub fn feed_lines(state: &FeedState) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(document_rows(state));
    for item in &state.items {
        item_lines(item, &mut lines);
    }
    if state.loading() {
        lines.push(loading_line());
    }
    lines
}

fn loading_line() -> Line<'static> {
    Line::from(Span::styled(
        LOADING_TEXT,
        Style::default().fg(LOADING).add_modifier(Modifier::ITALIC),
    ))
}

/// Rows `first..first + count` of [`feed_lines`], built without the rest.
fn visible_lines(state: &FeedState, first: usize, count: usize) -> Vec<Line<'static>> {
    let end = first.saturating_add(count);
    let mut lines = Vec::with_capacity(count);
    let mut row = 0;
    for item in &state.items {
        if row >= end {
            break;
        }
        let rows = item_rows(item);
        if row + rows > first {
            let mut block = Vec::with_capacity(rows);
            item_lines(item, &mut block);
            lines.extend(block.into_iter().skip(first.saturating_sub(row)));
        }
        row += rows;
    }
    if state.loading() && (first..end).contains(&row) {
        lines.push(loading_line());
    }
    lines.truncate(count);
    lines
}

/// Feed widget scrolled to `scroll_top` rows.
pub struct FeedView<'a> {
    state: &'a FeedState,
    scroll_top: usize,
}

impl<'a> FeedView<'a> {
    pub fn new(state: &'a FeedState, scroll_top: usize) -> Self {
        Self { state, scroll_top }
    }
}

impl Widget for FeedView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = usize::from(area.height);
        Paragraph::new(visible_lines(self.state, self.scroll_top, rows)).render(area, buf);
    }
}
