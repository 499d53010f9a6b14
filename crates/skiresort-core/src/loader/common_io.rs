// crates/skiresort-core/src/loader/common_io.rs
use crate::error::LoadError;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

pub fn io_error(path: &Path, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Read the whole source file. The dataset is small and bounded, and the
/// decoder needs the complete byte buffer anyway.
pub fn read_source(path: &Path) -> Result<Vec<u8>, LoadError> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| io_error(path, e))?;
    Ok(bytes)
}

/// Resolve an encoding label such as `ISO-8859-1`, `latin1` or `utf-8`.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding, LoadError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| LoadError::UnknownEncoding(label.to_string()))
}

/// Decode `bytes` to UTF-8, stripping a BOM. Malformed input is an error
/// rather than being replaced with U+FFFD.
pub fn decode<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Result<Cow<'a, str>, LoadError> {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(LoadError::Decode(encoding.name()));
    }
    Ok(text)
}

pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}.{suffix}"))
}
