//! Mock adapters for testing.

pub mod theme;

pub use theme::MemoryThemeStore;
