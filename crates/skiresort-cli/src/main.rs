//! skiresort-cli: command-line interface for skiresort-core
//!
//! This binary loads the ski resort dataset, ranks every resort within its
//! country and answers the queries of the core crate from the terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ skiresort stats
//!
//! - Countries of a continent
//!   $ skiresort countries Europe
//!
//! - Resorts up to 60 with night skiing, reporting total slopes
//!   $ skiresort map --max-price 60 --night --metric total_slopes
//!
//! - Top 5 Norwegian resorts by highest point
//!   $ skiresort top Norway --metric "Highest point" --limit 5
//!
//! - Report card of a single resort
//!   $ skiresort resort Hemsedal
//!
//! Data source
//! -----------
//!
//! By default the CLI reads the CSV bundled with `skiresort-core` and writes
//! nothing. Use `--input <path>` (or `SKIRESORT_DATA`) for another file and
//! `--cache` to keep a ranked binary snapshot next to it for fast subsequent
//! runs. Set `RUST_LOG=debug` to see what the loader does.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;
use skiresort_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let input_path = args.input.clone().unwrap_or_else(|| {
        ResortTable::default_dataset_path()
            .to_string_lossy()
            .to_string()
    });
    let options = load_options(&args)?;
    tracing::debug!(
        input = %input_path,
        encoding = %options.encoding,
        delimiter = %char::from(options.delimiter),
        cache = options.use_cache,
        "loading resort table"
    );

    let table = ResortTable::load_from_path(&input_path, &options)
        .with_context(|| format!("failed to load {input_path}"))?;
    let json = args.json;

    match args.command {
        Commands::Stats => {
            let stats = table.stats();
            if json {
                return print_json(&stats);
            }
            println!("Table statistics:");
            println!("  Resorts: {}", stats.resorts);
            println!("  Countries: {}", stats.countries);
            println!("  Continents: {}", stats.continents);
        }

        Commands::Continents => {
            let continents = table.continents();
            if json {
                return print_json(&continents);
            }
            for c in continents {
                println!("{c}");
            }
        }

        Commands::Countries { continent } => {
            let countries = table.countries_for(&continent);
            if json {
                return print_json(&countries);
            }
            if countries.is_empty() {
                println!("No countries found for: {continent}");
            }
            for c in countries {
                println!("- {c}");
            }
        }

        Commands::Metrics => {
            let metrics: Vec<&str> = Column::metric_choices().map(Column::ident).collect();
            if json {
                return print_json(&metrics);
            }
            for column in Column::metric_choices() {
                println!("{:<24} {}", column.ident(), column.title());
            }
        }

        Commands::Map {
            max_price,
            summer,
            night,
            snow_park,
            child_friendly,
            metric,
        } => {
            let metric = Column::metric(&metric)?;
            let mut flags = FeatureSet::new();
            for (wanted, feature) in [
                (summer, Feature::SummerSkiing),
                (night, Feature::NightSkiing),
                (snow_park, Feature::SnowPark),
                (child_friendly, Feature::ChildFriendly),
            ] {
                if wanted {
                    flags.insert(feature);
                }
            }

            let points = table.filter_geo(max_price, flags, metric)?;
            if json {
                return print_json(&points);
            }
            println!(
                "Resorts with a Ticket Price up to ${max_price} by {}.",
                metric.title()
            );
            for p in &points {
                println!(
                    "{:<32} {:>9.4} {:>9.4}  {}",
                    p.record.name(),
                    p.latitude(),
                    p.longitude(),
                    format_value(p.value)
                );
            }
            println!("{} resorts", points.len());
        }

        Commands::Top {
            country,
            metric,
            limit,
        } => {
            let metric = Column::metric(&metric)?;
            let top = table.top_n_by_country(&country, metric, limit)?;
            if top.is_empty() {
                tracing::debug!(%country, "no resorts for country");
                if let Some(known) = suggest_country(&table, &country) {
                    eprintln!("did you mean {known}?");
                }
                // JSON output keeps its array shape; the notice goes to stderr.
                if json {
                    eprintln!("no update");
                    return print_json(&top);
                }
                println!("no update");
                return Ok(());
            }
            if json {
                return print_json(&top);
            }
            println!("{}", top_header(top.len(), &country, metric));
            for (i, r) in top.iter().enumerate() {
                println!(
                    "{:>2}. {:<32} {}",
                    i + 1,
                    r.name(),
                    format_value(r.metric(metric))
                );
            }
        }

        Commands::Resort { name } => match table.report_card(&name) {
            Ok(card) => {
                if json {
                    return print_json(&card);
                }
                println!("Resort: {} ({})", card.name, card.country);
                println!("  Elevation rank: {}", card.elevation_rank);
                println!("  Price rank: {}", card.price_rank);
                println!("  Slope rank: {}", card.slope_rank);
                println!("  Cannon rank: {}", card.cannon_rank);
                let duplicates = table.lookup_all(&name).len();
                if duplicates > 1 {
                    eprintln!("note: {duplicates} resorts share this name, showing the first");
                }
            }
            Err(err @ ResortError::NotFound(_)) => {
                let suggestions = table.find_by_substring(&name);
                if suggestions.is_empty() {
                    return Err(err.into());
                }
                eprintln!("{err}. Did you mean:");
                for r in suggestions.iter().take(5) {
                    eprintln!("  {} ({})", r.name(), r.country());
                }
                std::process::exit(1);
            }
            Err(err) => return Err(err.into()),
        },

        Commands::Search { query } => {
            let matches = table.find_by_substring(&query);
            if json {
                return print_json(&matches);
            }
            if matches.is_empty() {
                println!("No resorts found matching: {query}");
            } else {
                for r in matches {
                    println!("{}, {}, {}", r.name(), r.country(), r.continent());
                }
            }
        }
    }

    Ok(())
}

fn load_options(args: &CliArgs) -> anyhow::Result<LoadOptions> {
    if !args.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", args.delimiter);
    }
    Ok(LoadOptions::default()
        .with_encoding(args.encoding.clone())
        .with_delimiter(args.delimiter as u8)
        .with_cache(args.cache))
}

/// Heading of a country ranking, counting the rows actually shown.
fn top_header(shown: usize, country: &str, metric: Column) -> String {
    format!("Top {shown} Resorts in {country} by {}", metric.title())
}

/// A known country whose name matches `country` up to case and accents.
fn suggest_country<'a>(table: &'a ResortTable, country: &str) -> Option<&'a str> {
    table
        .continents()
        .into_iter()
        .flat_map(|continent| table.countries_for(continent))
        .find(|known| equals_folded(known, country))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}
