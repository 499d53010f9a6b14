// crates/skiresort-core/src/model/convert.rs
use super::Resort;
use crate::error::LoadError;
use crate::raw::ResortRaw;
use crate::schema::Column;

/// **Standard Converter:** Raw -> Resort.
///
/// Checks the domain constraints serde cannot express: identifying strings
/// must be non-empty and the price must not be negative. `line` is the
/// 1-based line of the row in the source, used for error reporting.
pub fn from_raw(raw: ResortRaw, line: Option<u64>) -> Result<Resort, LoadError> {
    let invalid = |column: Column, message: &str| LoadError::InvalidValue {
        line,
        column: column.header().to_string(),
        message: message.to_string(),
    };

    let name = raw.name.trim().to_string();
    if name.is_empty() {
        return Err(invalid(Column::Resort, "empty resort name"));
    }
    let country = raw.country.trim().to_string();
    if country.is_empty() {
        return Err(invalid(Column::Country, "empty country"));
    }
    let continent = raw.continent.trim().to_string();
    if continent.is_empty() {
        return Err(invalid(Column::Continent, "empty continent"));
    }
    if raw.price < 0.0 {
        return Err(invalid(Column::Price, "price must not be negative"));
    }

    Ok(Resort {
        id: raw.id,
        name,
        latitude: raw.latitude,
        longitude: raw.longitude,
        country,
        continent,
        price: raw.price,
        season: raw.season.filter(|s| !s.trim().is_empty()),
        highest_point: raw.highest_point,
        lowest_point: raw.lowest_point,
        beginner_slopes: raw.beginner_slopes,
        intermediate_slopes: raw.intermediate_slopes,
        difficult_slopes: raw.difficult_slopes,
        total_slopes: raw.total_slopes,
        longest_run: raw.longest_run,
        snow_cannons: raw.snow_cannons,
        surface_lifts: raw.surface_lifts,
        chair_lifts: raw.chair_lifts,
        gondola_lifts: raw.gondola_lifts,
        total_lifts: raw.total_lifts,
        lift_capacity: raw.lift_capacity,
        child_friendly: raw.child_friendly,
        snowparks: raw.snowparks,
        nightskiing: raw.nightskiing,
        summer_skiing: raw.summer_skiing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, price: f64) -> ResortRaw {
        ResortRaw {
            id: Some(1),
            name: name.to_string(),
            latitude: 60.0,
            longitude: 10.0,
            country: "Norway".into(),
            continent: "Europe".into(),
            price,
            season: Some(" ".into()),
            highest_point: 1500.0,
            lowest_point: None,
            beginner_slopes: None,
            intermediate_slopes: None,
            difficult_slopes: None,
            total_slopes: 40,
            longest_run: None,
            snow_cannons: 10,
            surface_lifts: None,
            chair_lifts: None,
            gondola_lifts: None,
            total_lifts: None,
            lift_capacity: None,
            child_friendly: "Yes".into(),
            snowparks: "No".into(),
            nightskiing: "No".into(),
            summer_skiing: "No".into(),
        }
    }

    #[test]
    fn trims_identifiers_and_drops_blank_season() {
        let resort = from_raw(raw("  Hemsedal ", 50.0), Some(2)).unwrap();
        assert_eq!(resort.name, "Hemsedal");
        assert_eq!(resort.season, None);
    }

    #[test]
    fn rejects_negative_price_with_line() {
        let err = from_raw(raw("Hemsedal", -1.0), Some(7)).unwrap_err();
        match err {
            LoadError::InvalidValue { line, column, .. } => {
                assert_eq!(line, Some(7));
                assert_eq!(column, "Price");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            from_raw(raw("   ", 10.0), None),
            Err(LoadError::InvalidValue { .. })
        ));
    }
}
