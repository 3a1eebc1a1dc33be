use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::cards::{
    cardname::CardName, guide_card::GuideCard, price_guide_set::PriceGuideSet,
    raw_price_row::RawPriceRow,
};
use crate::utilities::{
    constants::{MISSING_SORT_NUMBER, OUTPUT_HEADERS},
    file_management::{data_file_path, open_csv_reader, open_csv_writer},
    string_manipulators::date_time_as_string,
};

const REQUIRED_COLUMNS: [&str; 3] = ["Product Name", "Rarity", "Number"];

/// Reads the name, rarity and number cells of every row. Rows shorter than
/// the header read their missing cells as empty.
pub fn read_raw_rows(path: &Path) -> Result<Vec<RawPriceRow>, Box<dyn Error>> {
    let mut reader = open_csv_reader(path)?;

    let headers = reader.headers()?.clone();
    let mut indexes = [0usize; REQUIRED_COLUMNS.len()];
    for (index, column) in indexes.iter_mut().zip(REQUIRED_COLUMNS) {
        *index = headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| format!("{} has no '{}' column", path.display(), column))?;
    }
    let [name_index, rarity_index, number_index] = indexes;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let cell = |index: usize| record.get(index).unwrap_or_default().to_string();
        rows.push(RawPriceRow {
            product_name: cell(name_index),
            rarity: cell(rarity_index),
            number: cell(number_index),
        });
    }
    Ok(rows)
}

/// Gives every card the lowest collector number of its name group, then lets
/// ` // ` variants share the lowest number of their base name, so a location
/// and all its variants end up next to each other.
pub fn assign_sort_numbers(cards: &mut [GuideCard]) {
    let mut group_numbers: HashMap<CardName, u32> = HashMap::new();
    for card in cards.iter() {
        if let Some(number) = card.number.base_number() {
            group_numbers
                .entry(card.name.clone())
                .and_modify(|lowest| *lowest = (*lowest).min(number))
                .or_insert(number);
        }
    }

    let mut prefix_numbers: HashMap<String, u32> = HashMap::new();
    for card in cards.iter() {
        let group_number = group_numbers
            .get(&card.name)
            .copied()
            .unwrap_or(MISSING_SORT_NUMBER);
        prefix_numbers
            .entry(card.name.prefix.clone())
            .and_modify(|lowest| *lowest = (*lowest).min(group_number))
            .or_insert(group_number);
    }

    for card in cards.iter_mut() {
        card.sort_number = prefix_numbers
            .get(&card.name.prefix)
            .copied()
            .unwrap_or(MISSING_SORT_NUMBER);
    }
}

/// Turns raw rows into inventory-ordered cards, dropping rows that are not cards.
pub fn clean_rows(rows: &[RawPriceRow], set: &PriceGuideSet) -> Vec<GuideCard> {
    let mut cards: Vec<GuideCard> = rows
        .iter()
        .filter_map(|row| match GuideCard::from_raw_row(row, set) {
            Ok(card) => Some(card),
            Err(e) => {
                debug!("Skipping row '{}': {}", row.product_name, e);
                None
            }
        })
        .collect();

    assign_sort_numbers(&mut cards);
    cards.sort_by(|a, b| a.inventory_order(b));
    cards
}

pub fn write_inventory_csv(cards: &[GuideCard], path: &Path) -> Result<(), Box<dyn Error>> {
    let mut writer = open_csv_writer(path)?;
    writer.write_record(OUTPUT_HEADERS)?;
    for card in cards {
        writer.serialize(card.to_inventory_row())?;
    }
    writer.flush()?;
    Ok(())
}

/// Cleans one raw price guide file into an inventory CSV. Returns the number
/// of cards written.
pub fn clean_price_guide(
    set: &PriceGuideSet,
    path_in: &Path,
    path_out: &Path,
) -> Result<usize, Box<dyn Error>> {
    let rows = read_raw_rows(path_in)?;
    let cards = clean_rows(&rows, set);
    info!(
        "{}: kept {} of {} rows",
        set.name,
        cards.len(),
        rows.len()
    );

    write_inventory_csv(&cards, path_out)?;
    info!("Wrote cleaned file: {}", path_out.display());
    Ok(cards.len())
}

pub struct PriceGuideCleaner {
    data_dir: String,
}

impl PriceGuideCleaner {
    pub fn new(data_dir: &str) -> Self {
        PriceGuideCleaner {
            data_dir: data_dir.to_string(),
        }
    }

    pub fn clean_set(&self, set: &PriceGuideSet) -> Result<PathBuf, Box<dyn Error>> {
        let path_in = data_file_path(&self.data_dir, &set.raw_file_name());
        let path_out = data_file_path(&self.data_dir, &set.clean_file_name());
        clean_price_guide(set, &path_in, &path_out)?;
        Ok(path_out)
    }

    /// Cleans every set that has been scraped. Sets without a raw file are skipped.
    pub fn clean_all(&self, sets: &[PriceGuideSet]) -> Result<Vec<PathBuf>, Box<dyn Error>> {
        let start_time = chrono::prelude::Local::now();
        info!("Starting at {}", date_time_as_string(Some(start_time), None));

        let mut written = Vec::new();
        for set in sets {
            let path_in = data_file_path(&self.data_dir, &set.raw_file_name());
            if !path_in.is_file() {
                warn!("No raw price guide for {} at {}, skipping", set.name, path_in.display());
                continue;
            }
            written.push(self.clean_set(set)?);
        }

        let end_time = chrono::prelude::Local::now();
        info!(
            "Cleaning started at: {}. Finished at: {}. Took: {} seconds and wrote {} files",
            start_time,
            end_time,
            (end_time - start_time).num_seconds(),
            written.len()
        );
        Ok(written)
    }
}
