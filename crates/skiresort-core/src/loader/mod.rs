// crates/skiresort-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, character decoding, snapshot cache)
//! and delegates row parsing to [`standard`] and ranking to [`crate::rank`].

use crate::error::Result;
use crate::handle::TableHandle;
use crate::model::ResortTable;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod common_io;
pub mod snapshot;
pub mod standard;

/// Encoding of the published resort dataset.
pub const DEFAULT_ENCODING: &str = "ISO-8859-1";

/// How a source file is decoded and whether the snapshot cache is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// WHATWG encoding label, e.g. `ISO-8859-1` or `utf-8`.
    pub encoding: String,
    pub delimiter: u8,
    /// Read and write the binary snapshot next to the source. Off by
    /// default: a plain load persists nothing.
    pub use_cache: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            delimiter: b',',
            use_cache: false,
        }
    }
}

impl LoadOptions {
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }
}

impl ResortTable {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "resorts.csv"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// The process-wide table built from the bundled dataset.
    ///
    /// Loaded on first use and shared afterwards; see [`TableHandle::global`].
    pub fn load() -> Result<Arc<Self>> {
        Ok(TableHandle::global()?.current())
    }

    /// **Standard Loader:** read, decode, parse and rank a CSV file.
    ///
    /// With `use_cache` a snapshot built from identical source bytes is used
    /// instead of parsing, and a snapshot is written after a successful build.
    pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        // Validate the label before trusting a snapshot built with it.
        common_io::resolve_encoding(&options.encoding)?;

        let bytes = common_io::read_source(path)?;
        let key = options.use_cache.then(|| snapshot::SourceKey::of(&bytes));

        if let Some(key) = &key {
            if let Some(table) = snapshot::read(path, key, &options.encoding, options.delimiter) {
                tracing::debug!(path = %path.display(), resorts = table.len(), "loaded ranked snapshot");
                return Ok(table);
            }
        }

        let table = Self::from_bytes(&bytes, options)?;
        tracing::info!(
            path = %path.display(),
            resorts = table.len(),
            countries = table.continent_index().country_count(),
            "loaded resort dataset"
        );

        if let Some(key) = &key {
            if let Err(e) = snapshot::write(path, key, &options.encoding, options.delimiter, &table) {
                tracing::warn!(path = %path.display(), error = %e, "could not write ranked snapshot");
            }
        }
        Ok(table)
    }

    /// Build a table from any reader. Never touches the snapshot cache.
    pub fn from_reader(mut reader: impl Read, options: &LoadOptions) -> Result<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| common_io::io_error(Path::new("<reader>"), e))?;
        Self::from_bytes(&bytes, options)
    }

    /// Build a table from raw (still encoded) CSV bytes.
    pub fn from_bytes(bytes: &[u8], options: &LoadOptions) -> Result<Self> {
        let encoding = common_io::resolve_encoding(&options.encoding)?;
        let text = common_io::decode(bytes, encoding)?;
        let resorts = standard::parse_resorts(&text, options.delimiter)?;
        log_duplicate_names(&resorts);
        Self::from_resorts(resorts)
    }
}

fn log_duplicate_names(resorts: &[crate::model::Resort]) {
    let mut seen = std::collections::HashSet::new();
    for resort in resorts {
        if !seen.insert(resort.name()) {
            tracing::debug!(name = resort.name(), "duplicate resort name; lookups return the first row");
        }
    }
}
