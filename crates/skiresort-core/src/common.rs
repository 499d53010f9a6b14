// crates/skiresort-core/src/common.rs
use crate::model::Record;
use serde::Serialize;

/// Simple aggregate statistics for the table.
///
/// Returned by [`crate::ResortSearch::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DbStats {
    pub resorts: usize,
    pub countries: usize,
    pub continents: usize,
}

/// One geo-filter hit: the record and the value of the requested metric.
///
/// `value` is `None` only when the record lacks a supplementary column.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricPoint<'a> {
    pub record: &'a Record,
    pub value: Option<f64>,
}

impl MetricPoint<'_> {
    pub fn latitude(&self) -> f64 {
        self.record.resort.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.record.resort.longitude
    }
}

/// Per-resort KPI card: the four within-country ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportCard<'a> {
    pub name: &'a str,
    pub country: &'a str,
    pub elevation_rank: u32,
    pub price_rank: u32,
    pub slope_rank: u32,
    pub cannon_rank: u32,
}

impl<'a> From<&'a Record> for ReportCard<'a> {
    fn from(record: &'a Record) -> Self {
        ReportCard {
            name: record.name(),
            country: record.country(),
            elevation_rank: record.ranks.elevation,
            price_rank: record.ranks.price,
            slope_rank: record.ranks.slopes,
            cannon_rank: record.ranks.cannons,
        }
    }
}
