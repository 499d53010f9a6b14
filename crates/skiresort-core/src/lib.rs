// crates/skiresort-core/src/lib.rs

//! Ski resort dataset core: a CSV loader, a per-country rank annotator and a
//! read-only query engine over the resulting immutable table.
//!
//! ```no_run
//! use skiresort_core::prelude::*;
//!
//! let table = ResortTable::load_from_path("resorts.csv", &LoadOptions::default())?;
//! for record in table.top_n_by_country("Norway", Column::TotalSlopes, DEFAULT_TOP_N)? {
//!     println!("{:>3} {}", record.resort.total_slopes, record.name());
//! }
//! # Ok::<(), ResortError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod handle;
pub mod index;
pub mod loader; // The public loader
pub mod model;
pub mod prelude;
pub mod rank;
pub mod schema;
pub mod search; // impl of ResortSearch for ResortTable
pub mod text;
pub mod traits;
// Raw source rows, only seen by the loader
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::{DbStats, MetricPoint, ReportCard};
pub use crate::error::{LoadError, ResortError, Result};
pub use crate::handle::TableHandle;
pub use crate::index::ContinentIndex;
pub use crate::loader::LoadOptions;
pub use crate::model::{CountryRanks, Record, Resort, ResortTable};
pub use crate::schema::{Column, Feature, FeatureSet};
// Export the Search Trait (Crucial for users!)
pub use crate::traits::{ResortSearch, DEFAULT_TOP_N};
