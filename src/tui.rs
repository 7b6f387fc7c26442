//! Terminal lifecycle: raw mode, alternate screen, event polling.

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

/// Owns the terminal for the lifetime of the TUI session
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    entered: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self {
            terminal,
            entered: false,
        })
    }

    /// Switch to raw mode and the alternate screen
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        io::stdout()
            .execute(EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        self.entered = true;
        Ok(())
    }

    /// Restore the terminal to normal mode
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.terminal.show_cursor()?;
        restore_terminal().context("Failed to restore terminal")
    }

    /// Wait up to `timeout` for the next terminal event
    pub fn poll_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Leave the alternate screen and disable raw mode
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Set up panic hook to restore terminal state on panic
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort: the terminal must be usable to read the panic message
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
