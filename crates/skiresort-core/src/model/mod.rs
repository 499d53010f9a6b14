// crates/skiresort-core/src/model/mod.rs

//! Domain model of the annotated resort table.

pub mod convert;

use crate::index::ContinentIndex;
use crate::schema::{Column, Feature, FLAG_YES};
use serde::{Deserialize, Serialize};

/// File suffix of the ranked snapshot written next to a source CSV.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "rank.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "rank.bin.gz";

/// A resort as loaded from the source, before ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resort {
    pub id: Option<u32>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub continent: String,
    pub price: f64,
    pub season: Option<String>,
    pub highest_point: f64,
    pub lowest_point: Option<f64>,
    pub beginner_slopes: Option<f64>,
    pub intermediate_slopes: Option<f64>,
    pub difficult_slopes: Option<f64>,
    pub total_slopes: u32,
    pub longest_run: Option<f64>,
    pub snow_cannons: u32,
    pub surface_lifts: Option<u32>,
    pub chair_lifts: Option<u32>,
    pub gondola_lifts: Option<u32>,
    pub total_lifts: Option<u32>,
    pub lift_capacity: Option<u32>,
    // Flags keep the raw categorical value; only "Yes" counts as set.
    pub child_friendly: String,
    pub snowparks: String,
    pub nightskiing: String,
    pub summer_skiing: String,
}

impl Resort {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn continent(&self) -> &str {
        &self.continent
    }

    /// Raw categorical value of a feature flag.
    pub fn flag(&self, feature: Feature) -> &str {
        match feature {
            Feature::SummerSkiing => &self.summer_skiing,
            Feature::NightSkiing => &self.nightskiing,
            Feature::SnowPark => &self.snowparks,
            Feature::ChildFriendly => &self.child_friendly,
        }
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.flag(feature) == FLAG_YES
    }

    /// Value of a numeric source column. Returns `None` for categorical and
    /// derived columns and for supplementary values absent in the source.
    pub fn value(&self, column: Column) -> Option<f64> {
        let v = match column {
            Column::Id => return self.id.map(f64::from),
            Column::Latitude => self.latitude,
            Column::Longitude => self.longitude,
            Column::Price => self.price,
            Column::HighestPoint => self.highest_point,
            Column::LowestPoint => return self.lowest_point,
            Column::BeginnerSlopes => return self.beginner_slopes,
            Column::IntermediateSlopes => return self.intermediate_slopes,
            Column::DifficultSlopes => return self.difficult_slopes,
            Column::TotalSlopes => f64::from(self.total_slopes),
            Column::LongestRun => return self.longest_run,
            Column::SnowCannons => f64::from(self.snow_cannons),
            Column::SurfaceLifts => return self.surface_lifts.map(f64::from),
            Column::ChairLifts => return self.chair_lifts.map(f64::from),
            Column::GondolaLifts => return self.gondola_lifts.map(f64::from),
            Column::TotalLifts => return self.total_lifts.map(f64::from),
            Column::LiftCapacity => return self.lift_capacity.map(f64::from),
            _ => return None,
        };
        Some(v)
    }
}

/// Within-country competition ranks of the four ranked metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRanks {
    pub elevation: u32,
    pub price: u32,
    pub slopes: u32,
    pub cannons: u32,
}

/// A resort together with its derived ranks: one row of the annotated table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub resort: Resort,
    pub ranks: CountryRanks,
}

impl Record {
    pub fn name(&self) -> &str {
        self.resort.name()
    }

    pub fn country(&self) -> &str {
        self.resort.country()
    }

    pub fn continent(&self) -> &str {
        self.resort.continent()
    }

    pub fn price(&self) -> f64 {
        self.resort.price
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.resort.has(feature)
    }

    /// Value of any numeric column, derived ranks included.
    pub fn metric(&self, column: Column) -> Option<f64> {
        match column {
            Column::CountryElevationRank => Some(f64::from(self.ranks.elevation)),
            Column::CountryPriceRank => Some(f64::from(self.ranks.price)),
            Column::CountrySlopeRank => Some(f64::from(self.ranks.slopes)),
            Column::CountryCannonRank => Some(f64::from(self.ranks.cannons)),
            other => self.resort.value(other),
        }
    }
}

/// The annotated table. Immutable once built: fields are private and no
/// method hands out mutable access.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResortTable {
    records: Vec<Record>,
    continents: ContinentIndex,
}

impl ResortTable {
    /// Rank the given resorts and build the continent index.
    ///
    /// Fails with [`crate::ResortError::DataIntegrity`] if a ranked metric is
    /// not finite or a country appears under more than one continent.
    pub fn from_resorts(resorts: Vec<Resort>) -> crate::Result<Self> {
        let continents = ContinentIndex::build(&resorts)?;
        let records = crate::rank::annotate(resorts)?;
        Ok(Self {
            records,
            continents,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn continent_index(&self) -> &ContinentIndex {
        &self.continents
    }
}

#[cfg(test)]
impl Resort {
    /// Minimal resort for unit tests: zero metrics, every flag "No".
    pub(crate) fn sample(name: &str, country: &str, continent: &str) -> Self {
        Resort {
            id: None,
            name: name.into(),
            latitude: 0.0,
            longitude: 0.0,
            country: country.into(),
            continent: continent.into(),
            price: 0.0,
            season: None,
            highest_point: 0.0,
            lowest_point: None,
            beginner_slopes: None,
            intermediate_slopes: None,
            difficult_slopes: None,
            total_slopes: 0,
            longest_run: None,
            snow_cannons: 0,
            surface_lifts: None,
            chair_lifts: None,
            gondola_lifts: None,
            total_lifts: None,
            lift_capacity: None,
            child_friendly: "No".into(),
            snowparks: "No".into(),
            nightskiing: "No".into(),
            summer_skiing: "No".into(),
        }
    }
}
