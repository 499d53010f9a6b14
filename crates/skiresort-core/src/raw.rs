// crates/skiresort-core/src/raw.rs
use serde::Deserialize;

/// One resort row exactly as it appears in the source CSV.
///
/// Numeric coercion happens during deserialization: a cell that does not
/// parse as the declared type fails the row. Columns marked `default` are
/// optional in the source file and may also be left empty.
///
/// NOTE: This type mirrors the external dataset. It is converted into
/// [`crate::model::Resort`] before anything else sees it.
#[derive(Debug, Deserialize)]
pub struct ResortRaw {
    #[serde(rename = "ID", default)]
    pub id: Option<u32>,
    #[serde(rename = "Resort")]
    pub name: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Continent")]
    pub continent: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Season", default)]
    pub season: Option<String>,
    #[serde(rename = "Highest point")]
    pub highest_point: f64,
    #[serde(rename = "Lowest point", default)]
    pub lowest_point: Option<f64>,
    #[serde(rename = "Beginner slopes", default)]
    pub beginner_slopes: Option<f64>,
    #[serde(rename = "Intermediate slopes", default)]
    pub intermediate_slopes: Option<f64>,
    #[serde(rename = "Difficult slopes", default)]
    pub difficult_slopes: Option<f64>,
    #[serde(rename = "Total slopes")]
    pub total_slopes: u32,
    #[serde(rename = "Longest run", default)]
    pub longest_run: Option<f64>,
    #[serde(rename = "Snow cannons")]
    pub snow_cannons: u32,
    #[serde(rename = "Surface lifts", default)]
    pub surface_lifts: Option<u32>,
    #[serde(rename = "Chair lifts", default)]
    pub chair_lifts: Option<u32>,
    #[serde(rename = "Gondola lifts", default)]
    pub gondola_lifts: Option<u32>,
    #[serde(rename = "Total lifts", default)]
    pub total_lifts: Option<u32>,
    #[serde(rename = "Lift capacity", default)]
    pub lift_capacity: Option<u32>,
    #[serde(rename = "Child friendly")]
    pub child_friendly: String,
    #[serde(rename = "Snowparks")]
    pub snowparks: String,
    #[serde(rename = "Nightskiing")]
    pub nightskiing: String,
    #[serde(rename = "Summer skiing")]
    pub summer_skiing: String,
}
