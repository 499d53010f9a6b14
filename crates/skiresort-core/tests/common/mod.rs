#![allow(dead_code)]

use skiresort_core::{LoadOptions, ResortTable};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HEADER: &str = "Resort,Latitude,Longitude,Country,Continent,Price,Highest point,\
Total slopes,Snow cannons,Child friendly,Snowparks,Nightskiing,Summer skiing";

/// One CSV row with the minimal column set.
pub struct Row<'a> {
    pub name: &'a str,
    pub country: &'a str,
    pub continent: &'a str,
    pub price: f64,
    pub highest_point: f64,
    pub total_slopes: u32,
    pub snow_cannons: u32,
    pub flags: [&'a str; 4],
}

impl<'a> Row<'a> {
    pub fn new(name: &'a str, country: &'a str, price: f64) -> Self {
        Row {
            name,
            country,
            continent: "Europe",
            price,
            highest_point: 1000.0,
            total_slopes: 10,
            snow_cannons: 0,
            flags: ["No"; 4],
        }
    }

    pub fn slopes(mut self, n: u32) -> Self {
        self.total_slopes = n;
        self
    }

    pub fn continent(mut self, continent: &'a str) -> Self {
        self.continent = continent;
        self
    }

    /// Flags in header order: child friendly, snowparks, nightskiing, summer.
    pub fn flags(mut self, flags: [&'a str; 4]) -> Self {
        self.flags = flags;
        self
    }

    fn to_line(&self) -> String {
        format!(
            "{},60.0,10.0,{},{},{},{},{},{},{},{},{},{}",
            self.name,
            self.country,
            self.continent,
            self.price,
            self.highest_point,
            self.total_slopes,
            self.snow_cannons,
            self.flags[0],
            self.flags[1],
            self.flags[2],
            self.flags[3],
        )
    }
}

pub fn csv(rows: &[Row<'_>]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&row.to_line());
        out.push('\n');
    }
    out
}

pub fn table(rows: &[Row<'_>]) -> ResortTable {
    ResortTable::from_bytes(csv(rows).as_bytes(), &LoadOptions::default())
        .expect("fixture table should load")
}

/// Write `bytes` to `resorts.csv` in a fresh temp dir.
pub fn write_source(bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("resorts.csv");
    let mut file = std::fs::File::create(&path).expect("create fixture");
    file.write_all(bytes).expect("write fixture");
    (dir, path)
}
