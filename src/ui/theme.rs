//! Colors shared by the feed widgets.

use ratatui::style::Color;

pub const BORDER: Color = Color::Rgb(0x3f, 0x3f, 0x46);
pub const TEXT: Color = Color::Rgb(0xe4, 0xe4, 0xe7);
pub const MUTED: Color = Color::Rgb(0x71, 0x71, 0x7a);
pub const ITEM_BODY: Color = Color::Rgb(0xa1, 0xa1, 0xaa);
/// Loading indicator and the busy status dot.
pub const LOADING: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const IDLE: Color = Color::Rgb(0x10, 0xb9, 0x81);
