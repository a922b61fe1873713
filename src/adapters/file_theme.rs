//! File-backed theme store adapter.

use crate::theme::Theme;
use crate::traits::ThemeStore;
use color_eyre::{eyre::eyre, eyre::WrapErr, Result};
use std::fs;
use std::path::PathBuf;

/// Theme store persisting the preference as a single small file under the
/// user's config directory.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Create a store at the default location
    /// (`<config_dir>/terra/theme`).
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir().ok_or_else(|| eyre!("No config directory found"))?;
        Ok(Self {
            path: config_dir.join("terra").join("theme"),
        })
    }

    /// Create a store at a custom path. Used by tests and the
    /// `TERRA_THEME_PATH` override.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<Theme> {
        let contents = fs::read_to_string(&self.path).ok()?;
        Theme::from_persisted(&contents)
    }

    fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {:?}", parent))?;
        }
        fs::write(&self.path, theme.as_str())
            .wrap_err_with(|| format!("Failed to write theme to {:?}", self.path))?;
        Ok(())
    }
}
