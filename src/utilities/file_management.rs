use std::error::Error;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};

pub fn data_file_path(data_dir: &str, file_name: &str) -> PathBuf {
    Path::new(data_dir).join(file_name)
}

fn create_parent_dirs(path: &Path) -> std::io::Result<()> {
    // Create all parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Opens a CSV writer that accepts records of differing lengths, creating
/// the parent directories first. An existing file is truncated.
pub fn open_csv_writer(path: &Path) -> Result<csv::Writer<File>, Box<dyn Error>> {
    create_parent_dirs(path)?;
    let writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    Ok(writer)
}

/// Opens a CSV reader with a header row that tolerates short and long rows.
pub fn open_csv_reader(path: &Path) -> Result<csv::Reader<File>, Box<dyn Error>> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    Ok(reader)
}
