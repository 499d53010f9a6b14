use clap::{Parser, Subcommand};

/// CLI arguments for skiresort-cli
#[derive(Debug, Parser)]
#[command(
    name = "skiresort",
    version,
    about = "CLI for querying the ski resort dataset and its per-country rankings"
)]
pub struct CliArgs {
    /// Path to the resort CSV (default: the dataset bundled with skiresort-core)
    #[arg(short = 'i', long = "input", env = "SKIRESORT_DATA", global = true)]
    pub input: Option<String>,

    /// Character encoding of the CSV (WHATWG label)
    #[arg(short = 'e', long = "encoding", default_value = "ISO-8859-1", global = true)]
    pub encoding: String,

    /// Field delimiter of the CSV
    #[arg(short = 'd', long = "delimiter", default_value_t = ',', global = true)]
    pub delimiter: char,

    /// Keep a ranked snapshot next to the CSV and reuse it while the CSV is unchanged
    #[arg(long = "cache", global = true)]
    pub cache: bool,

    /// Print results as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the table contents
    Stats,

    /// List all continents
    Continents,

    /// List the countries of a continent
    Countries {
        /// Continent name (e.g. Europe)
        continent: String,
    },

    /// List the metrics accepted by `map` and `top`
    Metrics,

    /// Resorts under a price cap with the requested features
    Map {
        /// Highest ticket price to include
        #[arg(long = "max-price", default_value_t = 150.0)]
        max_price: f64,

        /// Only resorts with summer skiing
        #[arg(long)]
        summer: bool,

        /// Only resorts with night skiing
        #[arg(long)]
        night: bool,

        /// Only resorts with a snow park
        #[arg(long = "snow-park")]
        snow_park: bool,

        /// Only child friendly resorts
        #[arg(long = "child-friendly")]
        child_friendly: bool,

        /// Metric to report for each resort
        #[arg(short = 'm', long, default_value = "price")]
        metric: String,
    },

    /// Best resorts of a country by a metric
    Top {
        /// Country name (e.g. Norway)
        country: String,

        /// Metric to rank by
        #[arg(short = 'm', long, default_value = "price")]
        metric: String,

        /// Number of resorts to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Show the within-country ranks of a resort
    Resort {
        /// Exact resort name
        name: String,
    },

    /// Search resorts whose name contains a substring
    Search {
        /// Substring to search (case and accent insensitive)
        query: String,
    },
}
