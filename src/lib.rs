//! Terra - a terminal user interface for browsing the world's countries
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod models;
pub mod pipeline;
pub mod terminal;
pub mod theme;
pub mod traits;
pub mod ui;
