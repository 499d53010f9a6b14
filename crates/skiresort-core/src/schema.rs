// crates/skiresort-core/src/schema.rs

//! Fixed column schema of the resort table.
//!
//! Every source column and every derived rank column is a variant of
//! [`Column`]. Column kinds are known at build time, so metric validation is a
//! plain [`Column::is_numeric`] check instead of runtime type inspection.

use crate::error::{ResortError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categorical value that marks a feature flag as present.
pub const FLAG_YES: &str = "Yes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Id,
    Resort,
    Latitude,
    Longitude,
    Country,
    Continent,
    Price,
    Season,
    HighestPoint,
    LowestPoint,
    BeginnerSlopes,
    IntermediateSlopes,
    DifficultSlopes,
    TotalSlopes,
    LongestRun,
    SnowCannons,
    SurfaceLifts,
    ChairLifts,
    GondolaLifts,
    TotalLifts,
    LiftCapacity,
    ChildFriendly,
    Snowparks,
    Nightskiing,
    SummerSkiing,
    CountryElevationRank,
    CountryPriceRank,
    CountrySlopeRank,
    CountryCannonRank,
}

impl Column {
    /// All columns in table order (source columns first, derived ranks last).
    pub const ALL: [Column; 29] = [
        Column::Id,
        Column::Resort,
        Column::Latitude,
        Column::Longitude,
        Column::Country,
        Column::Continent,
        Column::Price,
        Column::Season,
        Column::HighestPoint,
        Column::LowestPoint,
        Column::BeginnerSlopes,
        Column::IntermediateSlopes,
        Column::DifficultSlopes,
        Column::TotalSlopes,
        Column::LongestRun,
        Column::SnowCannons,
        Column::SurfaceLifts,
        Column::ChairLifts,
        Column::GondolaLifts,
        Column::TotalLifts,
        Column::LiftCapacity,
        Column::ChildFriendly,
        Column::Snowparks,
        Column::Nightskiing,
        Column::SummerSkiing,
        Column::CountryElevationRank,
        Column::CountryPriceRank,
        Column::CountrySlopeRank,
        Column::CountryCannonRank,
    ];

    /// Header of the column in the source file. Derived columns have no
    /// source header and use their identifier.
    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Resort => "Resort",
            Column::Latitude => "Latitude",
            Column::Longitude => "Longitude",
            Column::Country => "Country",
            Column::Continent => "Continent",
            Column::Price => "Price",
            Column::Season => "Season",
            Column::HighestPoint => "Highest point",
            Column::LowestPoint => "Lowest point",
            Column::BeginnerSlopes => "Beginner slopes",
            Column::IntermediateSlopes => "Intermediate slopes",
            Column::DifficultSlopes => "Difficult slopes",
            Column::TotalSlopes => "Total slopes",
            Column::LongestRun => "Longest run",
            Column::SnowCannons => "Snow cannons",
            Column::SurfaceLifts => "Surface lifts",
            Column::ChairLifts => "Chair lifts",
            Column::GondolaLifts => "Gondola lifts",
            Column::TotalLifts => "Total lifts",
            Column::LiftCapacity => "Lift capacity",
            Column::ChildFriendly => "Child friendly",
            Column::Snowparks => "Snowparks",
            Column::Nightskiing => "Nightskiing",
            Column::SummerSkiing => "Summer skiing",
            derived => derived.ident(),
        }
    }

    /// Snake-case identifier, e.g. `highest_point` or `country_price_rank`.
    pub fn ident(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Resort => "resort",
            Column::Latitude => "latitude",
            Column::Longitude => "longitude",
            Column::Country => "country",
            Column::Continent => "continent",
            Column::Price => "price",
            Column::Season => "season",
            Column::HighestPoint => "highest_point",
            Column::LowestPoint => "lowest_point",
            Column::BeginnerSlopes => "beginner_slopes",
            Column::IntermediateSlopes => "intermediate_slopes",
            Column::DifficultSlopes => "difficult_slopes",
            Column::TotalSlopes => "total_slopes",
            Column::LongestRun => "longest_run",
            Column::SnowCannons => "snow_cannons",
            Column::SurfaceLifts => "surface_lifts",
            Column::ChairLifts => "chair_lifts",
            Column::GondolaLifts => "gondola_lifts",
            Column::TotalLifts => "total_lifts",
            Column::LiftCapacity => "lift_capacity",
            Column::ChildFriendly => "child_friendly",
            Column::Snowparks => "snowparks",
            Column::Nightskiing => "nightskiing",
            Column::SummerSkiing => "summer_skiing",
            Column::CountryElevationRank => "country_elevation_rank",
            Column::CountryPriceRank => "country_price_rank",
            Column::CountrySlopeRank => "country_slope_rank",
            Column::CountryCannonRank => "country_cannon_rank",
        }
    }

    /// Whether the column holds numbers and can be sorted or plotted.
    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            Column::Resort
                | Column::Country
                | Column::Continent
                | Column::Season
                | Column::ChildFriendly
                | Column::Snowparks
                | Column::Nightskiing
                | Column::SummerSkiing
        )
    }

    /// Columns added by the rank annotator.
    pub fn is_derived(self) -> bool {
        matches!(
            self,
            Column::CountryElevationRank
                | Column::CountryPriceRank
                | Column::CountrySlopeRank
                | Column::CountryCannonRank
        )
    }

    /// Human readable label: `country_price_rank` becomes `Country Price Rank`.
    pub fn title(self) -> String {
        self.ident()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Metrics offered for plotting: every numeric column except the row id
    /// and the coordinates.
    pub fn metric_choices() -> impl Iterator<Item = Column> {
        Column::ALL.into_iter().filter(|c| {
            c.is_numeric() && !matches!(c, Column::Id | Column::Latitude | Column::Longitude)
        })
    }

    /// Resolve a caller supplied metric name, rejecting unknown and
    /// non-numeric columns.
    pub fn metric(name: &str) -> Result<Column> {
        let column: Column = name.parse()?;
        column.ensure_numeric()
    }

    fn is_named(self, s: &str) -> bool {
        self.ident().eq_ignore_ascii_case(s) || self.header().eq_ignore_ascii_case(s)
    }

    pub(crate) fn ensure_numeric(self) -> Result<Column> {
        if self.is_numeric() {
            Ok(self)
        } else {
            Err(ResortError::InvalidMetric(format!(
                "column '{}' is not numeric",
                self.ident()
            )))
        }
    }
}

impl FromStr for Column {
    type Err = ResortError;

    /// Accepts the source header (`Highest point`) or the identifier
    /// (`highest_point`), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Column::ALL
            .into_iter()
            .find(|c| c.is_named(s))
            .ok_or_else(|| ResortError::InvalidMetric(format!("unknown column '{s}'")))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

/// Boolean-like feature flags a geo query can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    SummerSkiing,
    NightSkiing,
    SnowPark,
    ChildFriendly,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::SummerSkiing,
        Feature::NightSkiing,
        Feature::SnowPark,
        Feature::ChildFriendly,
    ];

    /// Source column holding the flag.
    pub fn column(self) -> Column {
        match self {
            Feature::SummerSkiing => Column::SummerSkiing,
            Feature::NightSkiing => Column::Nightskiing,
            Feature::SnowPark => Column::Snowparks,
            Feature::ChildFriendly => Column::ChildFriendly,
        }
    }

    pub fn ident(self) -> &'static str {
        match self {
            Feature::SummerSkiing => "summer_skiing",
            Feature::NightSkiing => "night_skiing",
            Feature::SnowPark => "snow_park",
            Feature::ChildFriendly => "child_friendly",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl FromStr for Feature {
    type Err = ResortError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Feature::ALL
            .into_iter()
            .find(|f| f.ident().eq_ignore_ascii_case(s) || f.column().is_named(s))
            .ok_or_else(|| ResortError::InvalidQuery(format!("unknown feature flag '{s}'")))
    }
}

/// A set of required feature flags. The empty set imposes no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet(u8);

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, feature: Feature) -> Self {
        self.insert(feature);
        self
    }

    pub fn insert(&mut self, feature: Feature) {
        self.0 |= feature.bit();
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.0 & feature.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|f| self.contains(*f))
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut set = FeatureSet::new();
        for f in iter {
            set.insert(f);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_and_identifiers() {
        assert_eq!("Highest point".parse::<Column>().unwrap(), Column::HighestPoint);
        assert_eq!("highest_point".parse::<Column>().unwrap(), Column::HighestPoint);
        assert_eq!(
            "COUNTRY_PRICE_RANK".parse::<Column>().unwrap(),
            Column::CountryPriceRank
        );
        assert!(matches!(
            "altitude".parse::<Column>(),
            Err(ResortError::InvalidMetric(_))
        ));
    }

    #[test]
    fn metric_rejects_categorical_columns() {
        assert_eq!(Column::metric("price").unwrap(), Column::Price);
        assert!(matches!(
            Column::metric("country"),
            Err(ResortError::InvalidMetric(_))
        ));
        assert!(matches!(
            Column::metric("Summer skiing"),
            Err(ResortError::InvalidMetric(_))
        ));
    }

    #[test]
    fn titles() {
        assert_eq!(Column::HighestPoint.title(), "Highest Point");
        assert_eq!(Column::CountryCannonRank.title(), "Country Cannon Rank");
        assert_eq!(Column::Price.title(), "Price");
    }

    #[test]
    fn metric_choices_skip_id_and_coordinates() {
        let choices: Vec<_> = Column::metric_choices().collect();
        assert_eq!(choices.first(), Some(&Column::Price));
        assert!(!choices.contains(&Column::Latitude));
        assert!(!choices.contains(&Column::Season));
        assert!(choices.contains(&Column::CountrySlopeRank));
    }

    #[test]
    fn feature_set_membership() {
        let set: FeatureSet = [Feature::SnowPark, Feature::ChildFriendly]
            .into_iter()
            .collect();
        assert!(set.contains(Feature::SnowPark));
        assert!(!set.contains(Feature::NightSkiing));
        assert_eq!(set.iter().count(), 2);
        assert!(FeatureSet::new().is_empty());
        assert_eq!("Nightskiing".parse::<Feature>().unwrap(), Feature::NightSkiing);
        assert_eq!("night_skiing".parse::<Feature>().unwrap(), Feature::NightSkiing);
    }
}
