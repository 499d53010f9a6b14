// crates/skiresort-core/src/search.rs
use crate::common::{DbStats, MetricPoint};
use crate::error::{ResortError, Result};
use crate::model::{Record, ResortTable};
use crate::schema::{Column, FeatureSet};
use crate::text::fold_key;
use crate::traits::ResortSearch;
use std::cmp::Ordering;

impl ResortSearch for ResortTable {
    fn stats(&self) -> DbStats {
        let index = self.continent_index();
        DbStats {
            resorts: self.len(),
            countries: index.country_count(),
            continents: index.continents().len(),
        }
    }

    fn records(&self) -> &[Record] {
        ResortTable::records(self)
    }

    fn continents(&self) -> Vec<&str> {
        self.continent_index().continents()
    }

    fn countries_for(&self, continent: &str) -> Vec<&str> {
        self.continent_index().countries_for(continent)
    }

    fn filter_geo(
        &self,
        max_price: f64,
        flags: FeatureSet,
        metric: Column,
    ) -> Result<Vec<MetricPoint<'_>>> {
        let metric = metric.ensure_numeric()?;
        if max_price.is_nan() {
            return Err(ResortError::InvalidQuery("max_price is NaN".into()));
        }

        let out: Vec<_> = ResortTable::records(self)
            .iter()
            .filter(|r| r.price() <= max_price)
            .filter(|r| flags.iter().all(|f| r.has(f)))
            .map(|record| MetricPoint {
                record,
                value: record.metric(metric),
            })
            .collect();
        tracing::debug!(max_price, ?flags, %metric, hits = out.len(), "filter_geo");
        Ok(out)
    }

    fn top_n_by_country(&self, country: &str, metric: Column, n: usize) -> Result<Vec<&Record>> {
        let metric = metric.ensure_numeric()?;

        let mut rows: Vec<&Record> = ResortTable::records(self)
            .iter()
            .filter(|r| r.country() == country)
            .collect();
        // sort_by is stable, so equal values keep row order.
        rows.sort_by(|a, b| descending(a.metric(metric), b.metric(metric)));
        rows.truncate(n);
        Ok(rows)
    }

    fn lookup(&self, name: &str) -> Result<&Record> {
        ResortTable::records(self)
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| ResortError::NotFound(format!("resort '{name}'")))
    }

    fn lookup_all(&self, name: &str) -> Vec<&Record> {
        ResortTable::records(self)
            .iter()
            .filter(|r| r.name() == name)
            .collect()
    }

    fn find_by_substring(&self, substr: &str) -> Vec<&Record> {
        let q = fold_key(substr.trim());
        if q.is_empty() {
            return Vec::new();
        }
        ResortTable::records(self)
            .iter()
            .filter(|r| fold_key(r.name()).contains(&q))
            .collect()
    }
}

/// Descending order with absent values last.
fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Resort;
    use crate::schema::Feature;

    fn resort(name: &str, country: &str, price: f64, slopes: u32) -> Resort {
        let continent = if country == "Japan" { "Asia" } else { "Europe" };
        Resort {
            price,
            total_slopes: slopes,
            ..Resort::sample(name, country, continent)
        }
    }

    fn table() -> ResortTable {
        let resorts = vec![
            Resort {
                nightskiing: "Yes".into(),
                ..resort("A", "Norway", 50.0, 40)
            },
            Resort {
                summer_skiing: "Yes".into(),
                ..resort("B", "Norway", 80.0, 40)
            },
            resort("C", "Sweden", 60.0, 20),
            Resort {
                nightskiing: "Yes".into(),
                snowparks: "Yes".into(),
                ..resort("D", "Norway", 10.0, 10)
            },
            Resort {
                lowest_point: Some(300.0),
                ..resort("E", "Japan", 40.0, 12)
            },
        ];
        ResortTable::from_resorts(resorts).unwrap()
    }

    fn names<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<&'a str> {
        records.into_iter().map(Record::name).collect()
    }

    #[test]
    fn filter_geo_applies_price_and_flags() {
        let t = table();
        let hits = t.filter_geo(60.0, FeatureSet::new(), Column::Price).unwrap();
        assert_eq!(names(hits.iter().map(|p| p.record)), ["A", "C", "D", "E"]);
        assert_eq!(hits[0].value, Some(50.0));

        let night = FeatureSet::new().with(Feature::NightSkiing);
        let hits = t.filter_geo(100.0, night, Column::Price).unwrap();
        assert_eq!(names(hits.iter().map(|p| p.record)), ["A", "D"]);

        let both = night.with(Feature::SnowPark);
        let hits = t.filter_geo(100.0, both, Column::Price).unwrap();
        assert_eq!(names(hits.iter().map(|p| p.record)), ["D"]);

        assert!(t.filter_geo(5.0, FeatureSet::new(), Column::Price).unwrap().is_empty());
    }

    #[test]
    fn filter_geo_reports_metric_values() {
        let t = table();
        let hits = t
            .filter_geo(f64::INFINITY, FeatureSet::new(), Column::CountrySlopeRank)
            .unwrap();
        let ranks: Vec<_> = hits.iter().map(|p| p.value).collect();
        assert_eq!(ranks, [Some(1.0), Some(1.0), Some(1.0), Some(3.0), Some(1.0)]);

        let hits = t
            .filter_geo(f64::INFINITY, FeatureSet::new(), Column::LowestPoint)
            .unwrap();
        assert_eq!(hits[4].value, Some(300.0));
        assert_eq!(hits[0].value, None);
    }

    #[test]
    fn filter_geo_rejects_bad_arguments() {
        let t = table();
        assert!(matches!(
            t.filter_geo(10.0, FeatureSet::new(), Column::Country),
            Err(ResortError::InvalidMetric(_))
        ));
        assert!(matches!(
            t.filter_geo(f64::NAN, FeatureSet::new(), Column::Price),
            Err(ResortError::InvalidQuery(_))
        ));
    }

    #[test]
    fn top_n_sorts_descending_with_stable_ties() {
        let t = table();
        let top = t.top_n_by_country("Norway", Column::TotalSlopes, 10).unwrap();
        assert_eq!(names(top), ["A", "B", "D"]);

        let top = t.top_n_by_country("Norway", Column::Price, 2).unwrap();
        assert_eq!(names(top), ["B", "A"]);

        assert!(t
            .top_n_by_country("Atlantis", Column::Price, 10)
            .unwrap()
            .is_empty());
        assert!(matches!(
            t.top_n_by_country("Norway", Column::Season, 10),
            Err(ResortError::InvalidMetric(_))
        ));
    }

    #[test]
    fn absent_values_sort_last() {
        assert_eq!(descending(Some(1.0), None), Ordering::Less);
        assert_eq!(descending(None, Some(1.0)), Ordering::Greater);
        assert_eq!(descending(Some(1.0), Some(2.0)), Ordering::Greater);
    }

    #[test]
    fn lookup_and_report_card() {
        let t = table();
        assert_eq!(t.lookup("D").unwrap().name(), "D");
        assert!(matches!(t.lookup("Nonexistent Resort"), Err(ResortError::NotFound(_))));

        let card = t.report_card("D").unwrap();
        assert_eq!(card.price_rank, 3);
        assert_eq!(card.slope_rank, 3);
        assert_eq!(card.country, "Norway");
    }

    #[test]
    fn duplicate_names_resolve_to_first_row() {
        let t = ResortTable::from_resorts(vec![
            resort("Twin", "Norway", 10.0, 1),
            resort("Twin", "Sweden", 20.0, 2),
        ])
        .unwrap();
        assert_eq!(t.lookup("Twin").unwrap().country(), "Norway");
        assert_eq!(t.lookup_all("Twin").len(), 2);
    }

    #[test]
    fn substring_search_folds_accents() {
        let t = ResortTable::from_resorts(vec![resort("Sölden", "Austria", 60.0, 30)]).unwrap();
        assert_eq!(names(t.find_by_substring("SOLD")), ["Sölden"]);
        assert!(t.find_by_substring("  ").is_empty());
    }

    #[test]
    fn stats_and_continents() {
        let t = table();
        assert_eq!(
            t.stats(),
            DbStats {
                resorts: 5,
                countries: 3,
                continents: 2
            }
        );
        assert_eq!(t.continents(), ["Asia", "Europe"]);
        assert_eq!(t.countries_for("Europe"), ["Norway", "Sweden"]);
    }
}
