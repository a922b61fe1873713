//! Runtime configuration.

use crate::api::DEFAULT_BASE_URL;
use std::path::PathBuf;

/// Configuration resolved at startup.
///
/// Use the builder methods to customize, or [`AppConfig::from_env`] to pick
/// up environment overrides.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the country-data API.
    pub api_base_url: String,
    /// Override for the theme preference file location.
    pub theme_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            theme_path: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the theme preference file path.
    pub fn with_theme_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.theme_path = Some(path.into());
        self
    }

    /// Build from environment variables: `TERRA_API_URL` overrides the API
    /// base URL, `TERRA_THEME_PATH` the theme file location.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("TERRA_API_URL") {
            if !url.is_empty() {
                config.api_base_url = url;
            }
        }
        if let Ok(path) = std::env::var("TERRA_THEME_PATH") {
            if !path.is_empty() {
                config.theme_path = Some(PathBuf::from(path));
            }
        }
        config
    }
}
