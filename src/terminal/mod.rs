//! Terminal management with RAII cleanup.
//!
//! `TerminalManager` sets up the terminal for TUI operation when created
//! and restores it when dropped, so the shell stays usable whether the
//! application exits normally or panics.

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// RAII guard that restores terminal state on drop.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Perform cleanup. Called by Drop; subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal and its cleanup guard.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter TUI mode and clear the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            _guard: TerminalGuard::new(),
        })
    }

    /// Mutable access to the underlying terminal for drawing.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Current terminal size.
    pub fn size(&self) -> Result<ratatui::layout::Size> {
        Ok(self.terminal.size()?)
    }

    /// Restore the terminal before dropping the manager.
    pub fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        leave_tui_mode(self.terminal.backend_mut());
        self.terminal.show_cursor()?;
        Ok(())
    }
}
