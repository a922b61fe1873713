//! Adapter implementations of the trait abstractions.

pub mod file_theme;
pub mod mock;

pub use file_theme::FileThemeStore;
