// crates/skiresort-core/src/index.rs
use crate::error::{ResortError, Result};
use crate::model::Resort;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Continent -> distinct countries, built once at load time.
///
/// Both levels are ordered, so every listing is alphabetical and
/// deterministic.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ContinentIndex {
    by_continent: BTreeMap<String, BTreeSet<String>>,
}

impl ContinentIndex {
    /// Build the index, rejecting a country that appears under two
    /// continents.
    pub fn build(resorts: &[Resort]) -> Result<Self> {
        let mut home: HashMap<&str, &str> = HashMap::new();
        let mut by_continent: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for resort in resorts {
            let (country, continent) = (resort.country(), resort.continent());
            match home.get(country) {
                Some(&seen) if seen != continent => {
                    return Err(ResortError::DataIntegrity(format!(
                        "country '{country}' appears under both '{seen}' and '{continent}'"
                    )));
                }
                Some(_) => continue,
                None => {
                    home.insert(country, continent);
                }
            }
            by_continent
                .entry(continent.to_string())
                .or_default()
                .insert(country.to_string());
        }
        Ok(Self { by_continent })
    }

    /// Sorted distinct countries of `continent`. Unknown continents yield an
    /// empty list.
    pub fn countries_for(&self, continent: &str) -> Vec<&str> {
        self.by_continent
            .get(continent)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// All continents, sorted.
    pub fn continents(&self) -> Vec<&str> {
        self.by_continent.keys().map(String::as_str).collect()
    }

    pub fn country_count(&self) -> usize {
        self.by_continent.values().map(BTreeSet::len).sum()
    }
}
