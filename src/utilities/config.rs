use std::env;

use log::error;

use super::constants::{
    DEFAULT_DATA_DIR, DEFAULT_PAGE_SETTLE_MS, DEFAULT_WORKBOOK_FILE, PRICE_GUIDE_BASE_URL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetcherKind {
    Browser,
    Http,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: String,
    pub base_url: String,
    pub fetcher: FetcherKind,
    pub headless: bool,
    pub page_settle_ms: u64,
    pub workbook_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            base_url: PRICE_GUIDE_BASE_URL.to_string(),
            fetcher: FetcherKind::Browser,
            headless: true,
            page_settle_ms: DEFAULT_PAGE_SETTLE_MS,
            workbook_file: DEFAULT_WORKBOOK_FILE.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from_env();
        config
    }

    fn update_from_env(&mut self) {
        self.apply(|key| env::var(key).ok());
    }

    /// Applies every known variable that `lookup` returns a value for.
    fn apply<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(data_dir) = lookup("DATA_DIR") {
            if !data_dir.trim().is_empty() {
                self.data_dir = data_dir.trim().to_string();
            }
        }
        if let Some(base_url) = lookup("PRICE_GUIDE_BASE_URL") {
            if !base_url.trim().is_empty() {
                self.base_url = base_url.trim().trim_end_matches('/').to_string();
            }
        }
        if let Some(fetcher) = lookup("FETCHER") {
            self.fetcher = match fetcher.to_lowercase().as_str() {
                "browser" => FetcherKind::Browser,
                "http" => FetcherKind::Http,
                other => {
                    error!("Unknown FETCHER '{}', using the browser", other);
                    FetcherKind::Browser
                }
            };
        }
        if let Some(headless) = lookup("HEADLESS") {
            self.headless = headless != "0";
        }
        if let Some(page_settle_ms) = lookup("PAGE_SETTLE_MS") {
            self.page_settle_ms = page_settle_ms.parse().unwrap_or(DEFAULT_PAGE_SETTLE_MS);
        }
        if let Some(workbook_file) = lookup("WORKBOOK_FILE") {
            if workbook_file.ends_with(".xlsx") {
                self.workbook_file = workbook_file;
            } else {
                error!("WORKBOOK_FILE must end with .xlsx, keeping {}", self.workbook_file);
            }
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}
