use std::error::Error;
use std::fs;
use std::path::Path;

use log::{info, warn};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::cards::price_guide_set::PriceGuideSet;
use crate::utilities::file_management::{data_file_path, open_csv_reader};

fn write_row(worksheet: &mut Worksheet, row: u32, values: &csv::StringRecord) -> Result<(), Box<dyn Error>> {
    for (column, value) in values.iter().enumerate() {
        // Blank cells stay blank so Quantity can be typed straight in
        if value.is_empty() {
            continue;
        }
        worksheet.write_string(row, column as u16, value)?;
    }
    Ok(())
}

fn copy_csv_to_worksheet(path: &Path, worksheet: &mut Worksheet) -> Result<u32, Box<dyn Error>> {
    let mut reader = open_csv_reader(path)?;
    write_row(worksheet, 0, reader.headers()?)?;

    let mut row = 0;
    for record in reader.records() {
        row += 1;
        write_row(worksheet, row, &record?)?;
    }
    Ok(row)
}

/// Puts every cleaned price guide into one workbook, a sheet per set named
/// after the set. Sets that have not been cleaned yet are left out.
pub fn combine_to_workbook(
    sets: &[PriceGuideSet],
    data_dir: &str,
    output: &Path,
) -> Result<usize, Box<dyn Error>> {
    let mut workbook = Workbook::new();
    let mut sheets = 0;

    for set in sets {
        let path = data_file_path(data_dir, &set.clean_file_name());
        if !path.is_file() {
            warn!("No cleaned price guide for {} at {}, skipping", set.name, path.display());
            continue;
        }

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(set.name)?;
        let rows = copy_csv_to_worksheet(&path, worksheet)?;
        info!("Added sheet '{}' with {} cards", set.name, rows);
        sheets += 1;
    }

    if sheets == 0 {
        return Err(format!("No cleaned price guides found in {}", data_dir).into());
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    workbook.save(output)?;
    info!("Created {} with {} sheets", output.display(), sheets);
    Ok(sheets)
}
