//! Error handling example for skiresort-rs
//!
//! This example demonstrates how load and query failures surface

use skiresort_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== SkiResort-RS Error Handling Example ===\n");

    // Example 1: Loading a file that does not exist
    println!("--- Example 1: Loading a missing file ---");
    match ResortTable::load_from_path("does-not-exist.csv", &LoadOptions::default()) {
        Ok(table) => println!("  Unexpectedly loaded {} resorts", table.len()),
        Err(e) => println!("  Load failed (fatal: {}): {e}", e.is_fatal()),
    }
    println!();

    // Example 2: A malformed number rejects the whole load
    println!("--- Example 2: Malformed CSV ---");
    let csv = "Resort,Latitude,Longitude,Country,Continent,Price,Highest point,\
Total slopes,Snow cannons,Child friendly,Snowparks,Nightskiing,Summer skiing\n\
Broken,60,10,Norway,Europe,cheap,1000,5,0,Yes,No,No,No\n";
    match ResortTable::from_bytes(csv.as_bytes(), &LoadOptions::default()) {
        Ok(_) => println!("  Unexpectedly parsed"),
        Err(e) => println!("  {e}"),
    }
    println!();

    let table = ResortTable::load()?;

    // Example 3: Unknown resorts
    println!("--- Example 3: Looking up unknown resorts ---");
    for name in ["Hemsedal", "Nonexistent Resort", "hemsedal"] {
        match table.lookup(name) {
            Ok(record) => println!("  Found: {} ({})", record.name(), record.country()),
            Err(e) => println!("  {e}"),
        }
    }
    println!();

    // Example 4: Bad metrics and queries
    println!("--- Example 4: Invalid metrics and price caps ---");
    for metric in ["Country", "snowfall", "Highest point"] {
        match Column::metric(metric) {
            Ok(column) => println!("  '{metric}' resolves to {column}"),
            Err(e) => println!("  {e}"),
        }
    }
    if let Err(e) = table.filter_geo(f64::NAN, FeatureSet::new(), Column::Price) {
        println!("  {e}");
    }
    println!();

    // Example 5: Unknown countries and continents are empty, not errors
    println!("--- Example 5: Empty answers ---");
    let top = table.top_n_by_country("Atlantis", Column::Price, DEFAULT_TOP_N)?;
    println!("  Resorts in Atlantis: {}", top.len());
    println!("  Countries in Antarctica: {}", table.countries_for("Antarctica").len());

    Ok(())
}
