//! Panic hook for terminal restoration.
//!
//! Restores the terminal to a usable state before the default panic
//! output runs, so a panic never leaves the shell in raw mode.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal.
///
/// Call early in main(), before creating the `TerminalManager`.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
