//! REST Countries API client.
//!
//! This module provides the HTTP client for the upstream country-data API.
//! Two call shapes are used: fetch-all (an array of country objects) and
//! fetch-by-identifier (an array of zero or one country objects). Any
//! backend that preserves those shapes can substitute via `with_base_url`.

use crate::models::{CountrySummary, DetailResolution, RawCountry};
use reqwest::Client;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Error type for API client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, DNS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Response body was not decodable as the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Server returned a non-success status.
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },
}

/// Client for the REST Countries API.
///
/// Holds a reusable `reqwest::Client`; the base URL is injectable so tests
/// can point at a mock server.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    /// Base URL for the API.
    pub base_url: String,
    /// Reusable HTTP client.
    client: Client,
}

impl RestCountriesClient {
    /// Create a client against the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Fetch the full country collection, normalized to the list projection.
    ///
    /// Issued once per application session; the result is held in memory
    /// and filtered client-side.
    pub async fn fetch_all(&self) -> Result<Vec<CountrySummary>, ApiError> {
        let url = format!("{}/all", self.base_url);
        tracing::debug!(%url, "fetching country collection");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::ServerError { status, message });
        }

        let body = response.text().await?;
        let raw: Vec<RawCountry> = serde_json::from_str(&body)?;
        tracing::info!(count = raw.len(), "country collection loaded");

        Ok(raw.into_iter().map(RawCountry::into_summary).collect())
    }

    /// Resolve a country identifier to a detail record.
    ///
    /// A successful response with an empty result set is the not-found
    /// sentinel, a normal value. Transport errors and non-success statuses
    /// propagate as errors and are never converted to not-found.
    pub async fn resolve_detail(&self, code: &str) -> Result<DetailResolution, ApiError> {
        let url = format!("{}/alpha/{}", self.base_url, code.to_lowercase());
        tracing::debug!(%url, code, "resolving country detail");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::ServerError { status, message });
        }

        let body = response.text().await?;
        let raw: Vec<RawCountry> = serde_json::from_str(&body)?;

        Ok(match raw.into_iter().next() {
            Some(country) => DetailResolution::Found(Box::new(country.into_detail())),
            None => DetailResolution::NotFound,
        })
    }
}

impl Default for RestCountriesClient {
    fn default() -> Self {
        Self::new()
    }
}
