use crate::ui::theme::{BORDER, TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const KEY_HINTS: &str = " ↑/↓ scroll │ PgUp/PgDn page │ Home/End jump │ q quit";

/// Bottom bar: key hints on the left, feed counters on the right.
pub struct Footer {
    page: u32,
    item_count: usize,
}

impl Footer {
    pub fn new(page: u32, item_count: usize) -> Self {
        Self { page, item_count }
    }

    fn counters(&self) -> String {
        format!("page {} · {} items │ v{} ", self.page, self.item_count, VERSION)
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        // Counters drawn last so they win when the bar is too narrow for both.
        Paragraph::new(KEY_HINTS).style(style).render(inner, buf);
        Paragraph::new(self.counters())
            .style(style)
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
