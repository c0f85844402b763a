use crate::ui::theme::{BORDER, IDLE, LOADING, MUTED, TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

pub const TITLE: &str = "Infinite Scroll Example";

/// Title bar with a status dot (busy while a fetch is outstanding) and the
/// endpoint being paged.
pub struct Header<'a> {
    endpoint: &'a str,
    loading: bool,
}

impl<'a> Header<'a> {
    pub fn new(endpoint: &'a str, loading: bool) -> Self {
        Self { endpoint, loading }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dot = if self.loading { LOADING } else { IDLE };
        let line = Line::from(vec![
            Span::styled("  ● ", Style::default().fg(dot)),
            Span::styled(
                TITLE,
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", self.endpoint), Style::default().fg(MUTED)),
        ]);

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(BORDER)),
            )
            .render(area, buf);
    }
}
