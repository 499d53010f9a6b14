//! Basic usage example for skiresort-rs
//!
//! This example demonstrates how to:
//! - Load the bundled resort table
//! - Browse continents and countries
//! - Filter resorts by price and features
//! - Rank resorts within a country and read a report card

use skiresort_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== SkiResort-RS Basic Usage Example ===\n");

    // Load the table (shared process-wide after the first call)
    println!("Loading resort table...");
    let table = ResortTable::load()?;
    let stats = table.stats();
    println!(
        "Table loaded: {} resorts in {} countries on {} continents\n",
        stats.resorts, stats.countries, stats.continents
    );

    // Example 1: Continents and their countries
    println!("--- Example 1: Countries per continent ---");
    for continent in table.continents() {
        println!("{continent}: {}", table.countries_for(continent).join(", "));
    }
    println!();

    // Example 2: Affordable resorts with night skiing
    println!("--- Example 2: Night skiing up to $60 ---");
    let flags = FeatureSet::new().with(Feature::NightSkiing);
    for point in table.filter_geo(60.0, flags, Column::TotalSlopes)? {
        println!(
            "{} ({:.2}, {:.2}): {:?} slopes",
            point.record.name(),
            point.latitude(),
            point.longitude(),
            point.value
        );
    }
    println!();

    // Example 3: Top resorts of a country
    println!("--- Example 3: Top 3 in Norway by total slopes ---");
    for (i, record) in table
        .top_n_by_country("Norway", Column::TotalSlopes, 3)?
        .iter()
        .enumerate()
    {
        println!(
            "{}. {} ({} slopes, rank {})",
            i + 1,
            record.name(),
            record.resort.total_slopes,
            record.ranks.slopes
        );
    }
    println!();

    // Example 4: Report card
    println!("--- Example 4: Report card ---");
    let card = table.report_card("Hemsedal")?;
    println!("{} ({})", card.name, card.country);
    println!("  Elevation rank: {}", card.elevation_rank);
    println!("  Price rank: {}", card.price_rank);
    println!("  Slope rank: {}", card.slope_rank);
    println!("  Cannon rank: {}", card.cannon_rank);

    Ok(())
}
