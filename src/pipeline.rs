//! Search/filter/sort pipeline for the country list.
//!
//! Derives the visible subset of the in-memory collection from the region
//! selector and the search string. Pure and synchronous: the collection is
//! fetched once per session and only ever filtered, never mutated, so the
//! same inputs always yield the same ordered output.

use crate::models::CountrySummary;

/// Region selector. `All` keeps every record; the rest match the region
/// field case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionFilter {
    #[default]
    All,
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl RegionFilter {
    /// All selectable values, in display order.
    pub const OPTIONS: [RegionFilter; 6] = [
        RegionFilter::All,
        RegionFilter::Africa,
        RegionFilter::Americas,
        RegionFilter::Asia,
        RegionFilter::Europe,
        RegionFilter::Oceania,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RegionFilter::All => "All",
            RegionFilter::Africa => "Africa",
            RegionFilter::Americas => "Americas",
            RegionFilter::Asia => "Asia",
            RegionFilter::Europe => "Europe",
            RegionFilter::Oceania => "Oceania",
        }
    }

    /// Case-insensitive match against a record's region field.
    pub fn matches(self, region: &str) -> bool {
        match self {
            RegionFilter::All => true,
            _ => region.eq_ignore_ascii_case(self.label()),
        }
    }

    /// Cycle to the next selector in display order.
    pub fn next(self) -> RegionFilter {
        let idx = Self::OPTIONS.iter().position(|r| *r == self).unwrap_or(0);
        Self::OPTIONS[(idx + 1) % Self::OPTIONS.len()]
    }

    /// Cycle to the previous selector in display order.
    pub fn prev(self) -> RegionFilter {
        let idx = Self::OPTIONS.iter().position(|r| *r == self).unwrap_or(0);
        Self::OPTIONS[(idx + Self::OPTIONS.len() - 1) % Self::OPTIONS.len()]
    }
}

/// Derive the ordered visible subset of the collection.
///
/// In order: region filter, then case-insensitive substring match of the
/// search string against the concatenation of name, capital and region,
/// then a stable case-sensitive sort by common name. An empty search
/// string matches everything.
pub fn visible_countries<'a>(
    countries: &'a [CountrySummary],
    region: RegionFilter,
    search: &str,
) -> Vec<&'a CountrySummary> {
    let needle = search.to_lowercase();
    let mut visible: Vec<&CountrySummary> = countries
        .iter()
        .filter(|c| region.matches(&c.region))
        .filter(|c| {
            if needle.is_empty() {
                return true;
            }
            let haystack = format!(
                "{}{}{}",
                c.name,
                c.capital.as_deref().unwrap_or(""),
                c.region
            )
            .to_lowercase();
            haystack.contains(&needle)
        })
        .collect();

    // Stable sort keeps original relative order for names that only
    // differ in case.
    visible.sort_by(|a, b| a.name.cmp(&b.name));
    visible
}

/// Message to display for an empty visible list, if any.
///
/// A non-empty search with no matches gets a message; an empty result from
/// region filtering alone gets none.
pub fn empty_message(visible_len: usize, search: &str) -> Option<&'static str> {
    if visible_len == 0 && !search.is_empty() {
        Some("No countries found...")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlagRef;

    fn country(id: &str, name: &str, capital: Option<&str>, region: &str) -> CountrySummary {
        CountrySummary {
            id: id.to_string(),
            name: name.to_string(),
            capital: capital.map(str::to_string),
            region: region.to_string(),
            population: 1_000_000,
            flag: FlagRef {
                url: format!("https://flagcdn.com/{}.png", id.to_lowercase()),
                description: format!("{} flag", name),
            },
        }
    }

    fn sample() -> Vec<CountrySummary> {
        vec![
            country("JP", "Japan", Some("Tokyo"), "Asia"),
            country("BE", "Belgium", Some("Brussels"), "Europe"),
            country("AU", "Australia", Some("Canberra"), "Oceania"),
            country("DE", "Germany", Some("Berlin"), "Europe"),
            country("HM", "Heard Island and McDonald Islands", None, "Antarctic"),
        ]
    }

    #[test]
    fn all_region_with_empty_search_keeps_everything_sorted() {
        let countries = sample();
        let visible = visible_countries(&countries, RegionFilter::All, "");

        let names: Vec<&str> = visible.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Australia",
                "Belgium",
                "Germany",
                "Heard Island and McDonald Islands",
                "Japan",
            ]
        );
    }

    #[test]
    fn region_filter_is_case_insensitive_equality() {
        let countries = sample();
        let visible = visible_countries(&countries, RegionFilter::Europe, "");

        let names: Vec<&str> = visible.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Belgium", "Germany"]);
    }

    #[test]
    fn search_matches_capital_substring() {
        let countries = sample();
        let visible = visible_countries(&countries, RegionFilter::All, "brus");

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Belgium");
    }

    #[test]
    fn search_matches_region_substring() {
        let countries = sample();
        let visible = visible_countries(&countries, RegionFilter::All, "asia");

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Japan");
    }

    #[test]
    fn search_excludes_non_matching_countries() {
        let countries = sample();
        let visible = visible_countries(&countries, RegionFilter::All, "asia");

        assert!(visible.iter().all(|c| c.name != "Belgium"));
    }

    #[test]
    fn missing_capital_does_not_break_text_filter() {
        let countries = sample();
        let visible = visible_countries(&countries, RegionFilter::All, "mcdonald");

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "HM");
    }

    #[test]
    fn filtering_is_idempotent() {
        let countries = sample();
        let first = visible_countries(&countries, RegionFilter::Europe, "ber");
        let second = visible_countries(&countries, RegionFilter::Europe, "ber");

        assert_eq!(first, second);
        // Source collection untouched.
        assert_eq!(countries.len(), 5);
        assert_eq!(countries[0].name, "Japan");
    }

    #[test]
    fn output_is_sorted_for_all_adjacent_pairs() {
        let countries = sample();
        let visible = visible_countries(&countries, RegionFilter::All, "");

        for pair in visible.windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }

    #[test]
    fn empty_message_only_for_non_empty_search() {
        assert_eq!(empty_message(0, "xyz"), Some("No countries found..."));
        assert_eq!(empty_message(0, ""), None);
        assert_eq!(empty_message(3, "xyz"), None);
    }

    #[test]
    fn region_cycling_wraps_both_ways() {
        assert_eq!(RegionFilter::All.next(), RegionFilter::Africa);
        assert_eq!(RegionFilter::Oceania.next(), RegionFilter::All);
        assert_eq!(RegionFilter::All.prev(), RegionFilter::Oceania);
        assert_eq!(RegionFilter::Africa.prev(), RegionFilter::All);
    }
}
