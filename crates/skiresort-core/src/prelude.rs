//! skiresort-core prelude: bring common types and traits into scope for demos.

pub use crate::common::{DbStats, MetricPoint, ReportCard};
pub use crate::error::{LoadError, ResortError, Result};
pub use crate::handle::TableHandle;
pub use crate::loader::LoadOptions;
pub use crate::model::{CountryRanks, Record, Resort, ResortTable};
pub use crate::schema::{Column, Feature, FeatureSet};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{ResortSearch, DEFAULT_TOP_N};
