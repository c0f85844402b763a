//! Raw mode, alternate screen and mouse capture, with a guaranteed restore.

use std::io::{self, Stdout};
use std::sync::{Arc, Once};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
}

/// Puts the terminal back on drop or from the panic hook, whichever runs
/// first. The restore happens at most once.
pub struct TerminalGuard {
    restore: Arc<Once>,
}

impl TerminalGuard {
    fn install() -> Self {
        let restore = Arc::new(Once::new());
        let hook_restore = Arc::clone(&restore);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            hook_restore.call_once(restore_terminal);
            default_hook(info);
        }));
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore.call_once(restore_terminal);
    }
}

/// Enter the TUI screen. The guard exists before any screen switch, so a
/// failure part-way through still leaves raw mode.
pub fn setup_terminal() -> io::Result<(Tui, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::install();
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok((terminal, guard))
}
