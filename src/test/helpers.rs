use std::fs;
use std::path::{Path, PathBuf};

use crate::cards::raw_price_row::RawPriceRow;

pub const PRICE_GUIDE_PAGE: &str = include_str!("price_guide_page.html");
pub const RAW_SHADOWS_OF_THE_GALAXY: &str = include_str!("raw_shadows_of_the_galaxy.csv");

pub fn raw_row(product_name: &str, rarity: &str, number: &str) -> RawPriceRow {
    RawPriceRow {
        product_name: product_name.to_string(),
        rarity: rarity.to_string(),
        number: number.to_string(),
    }
}

pub fn write_fixture(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, content).unwrap();
    path
}

/// Reads a CSV file back as rows of strings, header row included.
pub fn read_csv_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|record| record.unwrap().iter().map(|s| s.to_string()).collect())
        .collect()
}
