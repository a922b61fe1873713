//! Data models for terra.

pub mod country;

pub use country::{
    CountryDetail, CountrySummary, Currency, DetailResolution, FlagRef, RawCountry,
};
