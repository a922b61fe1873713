//! Terminal setup and teardown functions.
//!
//! Low-level entry and exit from TUI mode. Used by `TerminalManager` but
//! callable directly, for example from the panic hook.

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode: alternate screen plus bracketed paste.
///
/// # Errors
///
/// Returns an error if any terminal commands fail.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste)
}

/// Leave TUI mode and restore the terminal to its normal state.
///
/// Safe to call multiple times; errors are ignored so this can run from
/// a panic hook.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();

    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen);
    let _ = writer.flush();

    let _ = execute!(writer, Show);
}

/// Restore the terminal after a panic or error. Ignores all failures.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
