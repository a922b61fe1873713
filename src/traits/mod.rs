//! Trait abstractions for dependency injection.

pub mod storage;

pub use storage::ThemeStore;
