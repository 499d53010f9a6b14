// crates/skiresort-core/src/rank.rs

//! Per-country competition ranking.
//!
//! Each ranked metric is ranked independently: resorts are partitioned by
//! country, sorted by the metric in descending order and numbered so that
//! equal values share the lower rank and the next distinct value skips the
//! tied positions (`[100, 100, 80]` ranks as `[1, 1, 3]`).

use crate::error::{ResortError, Result};
use crate::model::{CountryRanks, Record, Resort};
use crate::schema::Column;
use std::collections::HashMap;

/// The metrics that receive a derived rank column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankedMetric {
    Elevation,
    Price,
    Slopes,
    Cannons,
}

impl RankedMetric {
    pub const ALL: [RankedMetric; 4] = [
        RankedMetric::Elevation,
        RankedMetric::Price,
        RankedMetric::Slopes,
        RankedMetric::Cannons,
    ];

    /// Column the rank is computed from.
    pub fn source(self) -> Column {
        match self {
            RankedMetric::Elevation => Column::HighestPoint,
            RankedMetric::Price => Column::Price,
            RankedMetric::Slopes => Column::TotalSlopes,
            RankedMetric::Cannons => Column::SnowCannons,
        }
    }

    /// Derived column holding the rank.
    pub fn target(self) -> Column {
        match self {
            RankedMetric::Elevation => Column::CountryElevationRank,
            RankedMetric::Price => Column::CountryPriceRank,
            RankedMetric::Slopes => Column::CountrySlopeRank,
            RankedMetric::Cannons => Column::CountryCannonRank,
        }
    }

    fn value(self, resort: &Resort) -> f64 {
        match self {
            RankedMetric::Elevation => resort.highest_point,
            RankedMetric::Price => resort.price,
            RankedMetric::Slopes => f64::from(resort.total_slopes),
            RankedMetric::Cannons => f64::from(resort.snow_cannons),
        }
    }

    fn assign(self, ranks: &mut CountryRanks, rank: u32) {
        match self {
            RankedMetric::Elevation => ranks.elevation = rank,
            RankedMetric::Price => ranks.price = rank,
            RankedMetric::Slopes => ranks.slopes = rank,
            RankedMetric::Cannons => ranks.cannons = rank,
        }
    }
}

/// Competition ranks of `values` in descending order, returned in input
/// order. Values must be finite.
///
/// ```rust
/// use skiresort_core::rank::competition_ranks;
///
/// assert_eq!(competition_ranks(&[100.0, 100.0, 80.0]), vec![1, 1, 3]);
/// assert_eq!(competition_ranks(&[10.0, 40.0, 40.0]), vec![3, 1, 1]);
/// ```
pub fn competition_ranks(values: &[f64]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    let mut ranks = vec![0u32; values.len()];
    let mut prev: Option<(f64, u32)> = None;
    for (pos, &idx) in order.iter().enumerate() {
        let value = values[idx];
        let rank = match prev {
            Some((prev_value, prev_rank)) if prev_value == value => prev_rank,
            _ => pos as u32 + 1,
        };
        ranks[idx] = rank;
        prev = Some((value, rank));
    }
    ranks
}

/// Annotate resorts with their four within-country ranks.
///
/// Row order is preserved. A non-finite ranked metric is a data integrity
/// violation; no value is ever excluded from ranking.
pub fn annotate(resorts: Vec<Resort>) -> Result<Vec<Record>> {
    for resort in &resorts {
        for metric in RankedMetric::ALL {
            let value = metric.value(resort);
            if !value.is_finite() {
                return Err(ResortError::DataIntegrity(format!(
                    "resort '{}' has undefined {} ({value})",
                    resort.name,
                    metric.source().ident()
                )));
            }
        }
    }

    // Country -> row indices, in row order.
    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, resort) in resorts.iter().enumerate() {
        groups.entry(resort.country.as_str()).or_default().push(idx);
    }

    let mut ranks = vec![CountryRanks::default(); resorts.len()];
    for metric in RankedMetric::ALL {
        for rows in groups.values() {
            let values: Vec<f64> = rows.iter().map(|&i| metric.value(&resorts[i])).collect();
            for (&row, rank) in rows.iter().zip(competition_ranks(&values)) {
                metric.assign(&mut ranks[row], rank);
            }
        }
    }
    tracing::debug!(
        resorts = resorts.len(),
        countries = groups.len(),
        "annotated country ranks"
    );

    Ok(resorts
        .into_iter()
        .zip(ranks)
        .map(|(resort, ranks)| Record { resort, ranks })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resort(name: &str, country: &str, price: f64, slopes: u32) -> Resort {
        Resort {
            price,
            total_slopes: slopes,
            highest_point: 1000.0,
            ..Resort::sample(name, country, "Europe")
        }
    }

    #[test]
    fn ties_share_rank_and_skip() {
        assert_eq!(competition_ranks(&[40.0, 40.0, 10.0]), vec![1, 1, 3]);
        assert_eq!(competition_ranks(&[5.0, 7.0, 7.0, 7.0, 1.0]), vec![4, 1, 1, 1, 5]);
        assert_eq!(competition_ranks(&[]), Vec::<u32>::new());
    }

    #[test]
    fn ranks_are_per_country() {
        let records = annotate(vec![
            resort("A", "Norway", 50.0, 40),
            resort("C", "Sweden", 60.0, 5),
            resort("B", "Norway", 80.0, 40),
            resort("D", "Norway", 10.0, 10),
        ])
        .unwrap();

        let by_name = |n: &str| records.iter().find(|r| r.name() == n).unwrap().ranks;
        assert_eq!(by_name("A").slopes, 1);
        assert_eq!(by_name("B").slopes, 1);
        assert_eq!(by_name("D").slopes, 3);
        assert_eq!(by_name("B").price, 1);
        assert_eq!(by_name("A").price, 2);
        // Alone in its country: rank 1 everywhere.
        assert_eq!(
            by_name("C"),
            CountryRanks {
                elevation: 1,
                price: 1,
                slopes: 1,
                cannons: 1
            }
        );
        // Equal elevation everywhere in Norway.
        assert_eq!(by_name("D").elevation, 1);
    }

    #[test]
    fn preserves_row_order() {
        let records = annotate(vec![
            resort("Z", "Norway", 1.0, 1),
            resort("Y", "Norway", 2.0, 2),
        ])
        .unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Z", "Y"]);
    }

    #[test]
    fn undefined_metric_is_integrity_error() {
        let err = annotate(vec![resort("A", "Norway", f64::NAN, 1)]).unwrap_err();
        assert!(matches!(err, ResortError::DataIntegrity(_)));
    }
}
