// crates/skiresort-core/src/error.rs
use thiserror::Error;

/// Failures while reading the source dataset into memory.
///
/// Any of these aborts the whole load: the ranking pass assumes complete
/// numeric columns, so a row is never skipped silently.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown character encoding: {0}")]
    UnknownEncoding(String),

    #[error("source is not valid {0}")]
    Decode(&'static str),

    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("CSV error{}: {message}", line_suffix(.line))]
    Csv { line: Option<u64>, message: String },

    #[error("invalid value in column '{column}'{}: {message}", line_suffix(.line))]
    InvalidValue {
        line: Option<u64>,
        column: String,
        message: String,
    },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

/// Top-level error type of the crate.
#[derive(Debug, Error)]
pub enum ResortError {
    #[error("load failed: {0}")]
    Load(#[from] LoadError),

    /// The data violates a table invariant (country under two continents,
    /// undefined metric during ranking).
    #[error("data integrity violation: {0}")]
    DataIntegrity(String),

    #[error("invalid metric: {0}")]
    InvalidMetric(String),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("not found: {0}")]
    NotFound(String),
}

impl ResortError {
    /// Errors that must stop the process before any query is served.
    ///
    /// Everything else is scoped to a single request and can be rendered as
    /// an empty or no-op state by the caller.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ResortError::Load(_) | ResortError::DataIntegrity(_))
    }
}

pub type Result<T> = std::result::Result<T, ResortError>;
