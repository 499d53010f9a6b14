// crates/skiresort-core/src/traits.rs
use crate::common::{DbStats, MetricPoint, ReportCard};
use crate::error::Result;
use crate::model::Record;
use crate::schema::{Column, FeatureSet};

/// Number of resorts returned by a country ranking unless told otherwise.
pub const DEFAULT_TOP_N: usize = 10;

/// Read-only queries over an annotated resort table.
///
/// Every method is a pure function of the table and its arguments: nothing is
/// cached between calls and the table is never mutated, so any number of
/// threads may query the same table concurrently.
pub trait ResortSearch {
    fn stats(&self) -> DbStats;

    /// All records in source row order.
    fn records(&self) -> &[Record];

    /// Sorted list of continents.
    fn continents(&self) -> Vec<&str>;

    /// Sorted distinct countries of a continent; empty if it is unknown.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use skiresort_core::{ResortSearch, ResortTable};
    ///
    /// let table = ResortTable::load().unwrap();
    /// for country in table.countries_for("Europe") {
    ///     println!("- {country}");
    /// }
    /// ```
    fn countries_for(&self, continent: &str) -> Vec<&str>;

    /// Resorts with `price <= max_price` that have every flag in `flags`,
    /// in row order, each paired with its `metric` value.
    ///
    /// An empty result is a valid answer. Fails with `InvalidMetric` if
    /// `metric` is not numeric and with `InvalidQuery` if `max_price` is NaN.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use skiresort_core::{Column, Feature, FeatureSet, ResortSearch, ResortTable};
    ///
    /// let table = ResortTable::load().unwrap();
    /// let flags = FeatureSet::new().with(Feature::NightSkiing);
    /// for point in table.filter_geo(75.0, flags, Column::TotalSlopes).unwrap() {
    ///     println!("{} ({:.2}, {:.2}) = {:?}",
    ///         point.record.name(), point.latitude(), point.longitude(), point.value);
    /// }
    /// ```
    fn filter_geo(
        &self,
        max_price: f64,
        flags: FeatureSet,
        metric: Column,
    ) -> Result<Vec<MetricPoint<'_>>>;

    /// The `n` resorts of `country` with the highest `metric`.
    ///
    /// Sorting is stable: ties keep row order, and resorts lacking a
    /// supplementary value come last. An unknown country yields an empty
    /// list.
    fn top_n_by_country(&self, country: &str, metric: Column, n: usize) -> Result<Vec<&Record>>;

    /// The resort named exactly `name`. If several rows share the name the
    /// first in row order wins.
    fn lookup(&self, name: &str) -> Result<&Record>;

    /// Every resort named exactly `name`, in row order.
    fn lookup_all(&self, name: &str) -> Vec<&Record>;

    /// The four within-country ranks of the resort named `name`.
    fn report_card(&self, name: &str) -> Result<ReportCard<'_>> {
        self.lookup(name).map(ReportCard::from)
    }

    /// Accent- and case-insensitive substring search on resort names.
    fn find_by_substring(&self, substr: &str) -> Vec<&Record>;
}
