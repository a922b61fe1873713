//! In-memory theme store for tests.

use crate::theme::Theme;
use crate::traits::ThemeStore;
use color_eyre::Result;
use std::sync::{Arc, Mutex};

/// Theme store that keeps the preference in memory.
///
/// Clones share the same slot, so a test can hold one handle while the
/// app owns another and observe what was saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    slot: Arc<Mutex<Option<Theme>>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a persisted theme.
    pub fn seeded(theme: Theme) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(theme))),
        }
    }

    /// The last saved theme, if any.
    pub fn saved(&self) -> Option<Theme> {
        *self.slot.lock().expect("theme slot poisoned")
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        *self.slot.lock().expect("theme slot poisoned")
    }

    fn save(&self, theme: Theme) -> Result<()> {
        *self.slot.lock().expect("theme slot poisoned") = Some(theme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_slot() {
        let store = MemoryThemeStore::new();
        let observer = store.clone();

        store.save(Theme::Dark).unwrap();
        assert_eq!(observer.saved(), Some(Theme::Dark));
    }

    #[test]
    fn seeded_store_loads_the_seed() {
        let store = MemoryThemeStore::seeded(Theme::Dark);
        assert_eq!(store.load(), Some(Theme::Dark));
    }
}
