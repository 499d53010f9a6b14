// crates/skiresort-core/src/loader/snapshot.rs

//! Binary snapshot of an annotated table, written next to its source CSV.
//!
//! The snapshot is an opt-in, best-effort cache. It is keyed on the length
//! and SHA-256 of the source bytes, never on file timestamps. Any failure to
//! read it falls back to parsing and ranking the CSV again, and failures to
//! write it are logged and ignored.

use super::common_io;
use crate::model::{ResortTable, CACHE_SUFFIX};
use bincode::Options;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Bumped whenever the serialized layout of [`ResortTable`] changes.
const SNAPSHOT_VERSION: u32 = 2;

/// Upper bound on snapshot size, guards against corrupt length prefixes.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

/// Identity of the source bytes a snapshot was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceKey {
    len: u64,
    sha256: [u8; 32],
}

impl SourceKey {
    pub fn of(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self {
            len: bytes.len() as u64,
            sha256: hasher.finalize().into(),
        }
    }
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    source: SourceKey,
    encoding: &'a str,
    delimiter: u8,
    table: &'a ResortTable,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    source: SourceKey,
    encoding: String,
    delimiter: u8,
    table: ResortTable,
}

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

pub fn snapshot_path(source: &Path) -> PathBuf {
    common_io::get_cache_path(source, CACHE_SUFFIX)
}

/// Load the snapshot for `source` if it exists, was built from exactly the
/// bytes identified by `key` and with the same decoding options.
pub fn read(source: &Path, key: &SourceKey, encoding: &str, delimiter: u8) -> Option<ResortTable> {
    let path = snapshot_path(source);
    let file = File::open(&path).ok()?;
    let reader = BufReader::new(file);
    #[cfg(feature = "compact")]
    let reader: Box<dyn Read> = Box::new(GzDecoder::new(reader));
    #[cfg(not(feature = "compact"))]
    let reader: Box<dyn Read> = Box::new(reader);

    let snapshot: Snapshot = match options().deserialize_from(reader) {
        Ok(s) => s,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "discarding unreadable snapshot");
            return None;
        }
    };
    if snapshot.version != SNAPSHOT_VERSION || snapshot.source != *key {
        tracing::debug!(path = %path.display(), "snapshot does not match the source");
        return None;
    }
    if !snapshot.encoding.eq_ignore_ascii_case(encoding) || snapshot.delimiter != delimiter {
        tracing::debug!(path = %path.display(), "snapshot built with different options");
        return None;
    }
    Some(snapshot.table)
}

/// Write the snapshot for `source`, keyed on the bytes the table was built
/// from.
pub fn write(
    source: &Path,
    key: &SourceKey,
    encoding: &str,
    delimiter: u8,
    table: &ResortTable,
) -> io::Result<()> {
    let path = snapshot_path(source);
    let snapshot = SnapshotRef {
        version: SNAPSHOT_VERSION,
        source: *key,
        encoding,
        delimiter,
        table,
    };

    let writer = BufWriter::new(File::create(&path)?);
    #[cfg(feature = "compact")]
    {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        options()
            .serialize_into(&mut encoder, &snapshot)
            .map_err(io::Error::other)?;
        encoder.finish()?.flush()
    }
    #[cfg(not(feature = "compact"))]
    {
        let mut writer = writer;
        options()
            .serialize_into(&mut writer, &snapshot)
            .map_err(io::Error::other)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_key_tracks_content_not_length_only() {
        let a = SourceKey::of(b"Resort,Price\nA,10\n");
        let b = SourceKey::of(b"Resort,Price\nB,10\n");
        assert_eq!(a, SourceKey::of(b"Resort,Price\nA,10\n"));
        assert_ne!(a, b);
    }
}
