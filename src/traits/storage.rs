//! Theme preference storage port.
//!
//! Abstracts where the theme preference lives so the application core is
//! testable without touching the filesystem. Implementations include the
//! file-backed production store and an in-memory store for tests.

use crate::theme::Theme;
use color_eyre::Result;

/// Storage port for the persisted theme preference.
///
/// The preference is read once at startup and written on every toggle.
pub trait ThemeStore: Send {
    /// Load the persisted theme, if one has been saved.
    fn load(&self) -> Option<Theme>;

    /// Persist the theme.
    fn save(&self, theme: Theme) -> Result<()>;
}
