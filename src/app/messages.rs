//! AppMessage enum for async communication within the application.

use crate::models::{CountrySummary, DetailResolution};

/// Messages received from async operations (fetches).
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The full country collection loaded and normalized.
    CountriesLoaded(Vec<CountrySummary>),
    /// The list fetch failed (transport or decoding).
    CountriesLoadFailed { error: String },
    /// A detail resolution finished.
    ///
    /// `generation` identifies which navigation issued the fetch; results
    /// carrying a stale generation are discarded.
    DetailResolved {
        generation: u64,
        resolution: DetailResolution,
    },
    /// A detail fetch failed (transport or decoding).
    DetailFailed { generation: u64, error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countries_load_failed_construction() {
        let msg = AppMessage::CountriesLoadFailed {
            error: "connection refused".to_string(),
        };
        let cloned = msg.clone();
        match cloned {
            AppMessage::CountriesLoadFailed { error } => {
                assert_eq!(error, "connection refused");
            }
            _ => panic!("Expected CountriesLoadFailed variant"),
        }
    }

    #[test]
    fn test_detail_resolved_carries_generation() {
        let msg = AppMessage::DetailResolved {
            generation: 7,
            resolution: DetailResolution::NotFound,
        };
        match msg {
            AppMessage::DetailResolved { generation, resolution } => {
                assert_eq!(generation, 7);
                assert_eq!(resolution, DetailResolution::NotFound);
            }
            _ => panic!("Expected DetailResolved variant"),
        }
    }
}
