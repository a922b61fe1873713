//! Country record types and normalization.
//!
//! Raw types mirror the subset of the REST Countries v3.1 payload the app
//! consumes. The normalizer is a pure mapping from a raw record to the
//! summary or detail projection; malformed payloads fail at the decode
//! step in the API client, never here.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw country record as returned by the upstream API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCountry {
    pub name: RawName,
    /// Uppercase two-letter code, used as the unique key.
    pub cca2: String,
    #[serde(default)]
    pub capital: Vec<String>,
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    pub population: u64,
    pub flags: RawFlags,
    #[serde(default)]
    pub tld: Vec<String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, RawCurrency>,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub borders: Vec<String>,
}

/// Name object with the common name and per-language native names.
#[derive(Debug, Clone, Deserialize)]
pub struct RawName {
    pub common: String,
    #[serde(default, rename = "nativeName")]
    pub native_name: BTreeMap<String, RawNativeName>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNativeName {
    pub common: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFlags {
    pub png: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrency {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Flag image reference with an accessible description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagRef {
    pub url: String,
    /// Upstream alt text, or a generated `"<name> flag"` fallback.
    pub description: String,
}

/// List-view projection of a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySummary {
    /// Uppercase two-letter code; stable list key and navigation target.
    pub id: String,
    pub name: String,
    pub capital: Option<String>,
    pub region: String,
    pub population: u64,
    pub flag: FlagRef,
}

/// A currency as rendered on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub code: String,
    pub name: String,
}

/// Detail-view projection of a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDetail {
    pub id: String,
    pub name: String,
    pub capital: Option<String>,
    pub region: String,
    pub subregion: Option<String>,
    pub population: u64,
    pub flag: FlagRef,
    /// One native name, from the lexicographically first language code.
    pub native_name: Option<String>,
    /// Top-level domains joined for display.
    pub tld: String,
    pub currencies: Vec<Currency>,
    /// Language code to display name.
    pub languages: BTreeMap<String, String>,
    /// Border-country identifiers, in upstream order.
    pub borders: Vec<String>,
}

/// Outcome of resolving a country identifier.
///
/// A resolution either fully succeeds or is the not-found sentinel.
/// Transport failures are errors at the client layer, never a variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailResolution {
    Found(Box<CountryDetail>),
    NotFound,
}

impl RawCountry {
    /// Normalize into the list-view projection.
    pub fn into_summary(self) -> CountrySummary {
        let flag = flag_ref(&self.name.common, self.flags);
        CountrySummary {
            id: self.cca2,
            name: self.name.common,
            capital: self.capital.into_iter().next(),
            region: self.region,
            population: self.population,
            flag,
        }
    }

    /// Normalize into the detail-view projection.
    pub fn into_detail(self) -> CountryDetail {
        let flag = flag_ref(&self.name.common, self.flags);
        let native_name = self
            .name
            .native_name
            .values()
            .next()
            .map(|n| n.common.clone());
        let currencies = self
            .currencies
            .into_iter()
            .map(|(code, raw)| Currency {
                code,
                name: raw.name,
            })
            .collect();
        CountryDetail {
            id: self.cca2,
            name: self.name.common,
            capital: self.capital.into_iter().next(),
            region: self.region,
            subregion: self.subregion,
            population: self.population,
            flag,
            native_name,
            tld: self.tld.join(", "),
            currencies,
            languages: self.languages,
            borders: self.borders,
        }
    }
}

fn flag_ref(name: &str, flags: RawFlags) -> FlagRef {
    let description = flags
        .alt
        .filter(|alt| !alt.is_empty())
        .unwrap_or_else(|| format!("{} flag", name));
    FlagRef {
        url: flags.png,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn belgium_json() -> &'static str {
        r#"{
            "name": {
                "common": "Belgium",
                "nativeName": {
                    "nld": {"common": "België"},
                    "deu": {"common": "Belgien"},
                    "fra": {"common": "Belgique"}
                }
            },
            "cca2": "BE",
            "capital": ["Brussels"],
            "region": "Europe",
            "subregion": "Western Europe",
            "population": 11589623,
            "flags": {
                "png": "https://flagcdn.com/w320/be.png",
                "alt": "The flag of Belgium is composed of three equal vertical bands of black, yellow and red."
            },
            "tld": [".be"],
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
            "languages": {"nld": "Dutch", "fra": "French", "deu": "German"},
            "borders": ["FRA", "DEU", "LUX", "NLD"]
        }"#
    }

    #[test]
    fn summary_selects_and_renames_fields() {
        let raw: RawCountry = serde_json::from_str(belgium_json()).unwrap();
        let summary = raw.into_summary();

        assert_eq!(summary.id, "BE");
        assert_eq!(summary.name, "Belgium");
        assert_eq!(summary.capital.as_deref(), Some("Brussels"));
        assert_eq!(summary.region, "Europe");
        assert_eq!(summary.population, 11_589_623);
        assert_eq!(summary.flag.url, "https://flagcdn.com/w320/be.png");
        assert!(summary.flag.description.starts_with("The flag of Belgium"));
    }

    #[test]
    fn detail_is_a_superset_of_summary_fields() {
        let raw: RawCountry = serde_json::from_str(belgium_json()).unwrap();
        let detail = raw.into_detail();

        assert_eq!(detail.id, "BE");
        assert_eq!(detail.subregion.as_deref(), Some("Western Europe"));
        assert_eq!(detail.tld, ".be");
        assert_eq!(
            detail.currencies,
            vec![Currency {
                code: "EUR".to_string(),
                name: "Euro".to_string(),
            }]
        );
        assert_eq!(detail.languages.len(), 3);
        assert_eq!(detail.languages.get("fra").map(String::as_str), Some("French"));
        assert_eq!(detail.borders, vec!["FRA", "DEU", "LUX", "NLD"]);
    }

    #[test]
    fn native_name_takes_first_language_code() {
        let raw: RawCountry = serde_json::from_str(belgium_json()).unwrap();
        let detail = raw.into_detail();

        // "deu" sorts before "fra" and "nld".
        assert_eq!(detail.native_name.as_deref(), Some("Belgien"));
    }

    #[test]
    fn flag_description_falls_back_to_generated_text() {
        let json = r#"{
            "name": {"common": "Atlantis"},
            "cca2": "AT",
            "region": "Oceania",
            "population": 0,
            "flags": {"png": "https://example.com/at.png"}
        }"#;
        let raw: RawCountry = serde_json::from_str(json).unwrap();
        let summary = raw.into_summary();

        assert_eq!(summary.flag.description, "Atlantis flag");
        assert_eq!(summary.capital, None);
    }

    #[test]
    fn missing_optional_collections_default_to_empty() {
        let json = r#"{
            "name": {"common": "Atlantis"},
            "cca2": "AT",
            "region": "Oceania",
            "population": 42,
            "flags": {"png": "https://example.com/at.png"}
        }"#;
        let raw: RawCountry = serde_json::from_str(json).unwrap();
        let detail = raw.into_detail();

        assert_eq!(detail.native_name, None);
        assert_eq!(detail.tld, "");
        assert!(detail.currencies.is_empty());
        assert!(detail.languages.is_empty());
        assert!(detail.borders.is_empty());
    }
}
