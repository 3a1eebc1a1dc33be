use std::{error::Error, path::Path, path::PathBuf};

use log::{info, warn};
use scraper::{ElementRef, Html, Selector};

use crate::cards::price_guide_set::PriceGuideSet;
use crate::page_fetcher::PageFetcher;
use crate::utilities::{
    constants::PRICE_GUIDE_TABLE_SELECTOR,
    file_management::{data_file_path, open_csv_writer},
    string_manipulators::date_time_as_string,
};

lazy_static::lazy_static! {
    static ref PRICE_GUIDE_TABLE: Selector = Selector::parse(PRICE_GUIDE_TABLE_SELECTOR).unwrap();
    static ref ANY_TABLE: Selector = Selector::parse("table").unwrap();
    static ref THEAD: Selector = Selector::parse("thead").unwrap();
    static ref TBODY: Selector = Selector::parse("tbody").unwrap();
    static ref TH: Selector = Selector::parse("th").unwrap();
    static ref TR: Selector = Selector::parse("tr").unwrap();
    static ref TD: Selector = Selector::parse("td").unwrap();
}

/// Header and body cells of a price guide table, as text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Text of an element with every text node trimmed and glued together.
fn cell_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Picks the price guide table (or the first table on the page) and reads it.
pub fn extract_price_table(html: &str) -> Result<PriceTable, String> {
    let document = Html::parse_document(html);

    let table = match document.select(&PRICE_GUIDE_TABLE).next() {
        Some(table) => table,
        None => {
            warn!("No price guide table found, falling back to the first table");
            document
                .select(&ANY_TABLE)
                .next()
                .ok_or("No <table> found. Inspect the page structure.")?
        }
    };

    let headers: Vec<String> = table
        .select(&THEAD)
        .next()
        .map(|thead| thead.select(&TH).map(cell_text).collect())
        .unwrap_or_default();

    // html5ever wraps bare rows in a tbody of its own, so only a tbody that
    // is in the markup means the first row is data
    let tbody = table
        .select(&TBODY)
        .next()
        .filter(|_| html.to_ascii_lowercase().contains("<tbody"));
    let row_elements: Vec<ElementRef> = match tbody {
        Some(tbody) => tbody.select(&TR).collect(),
        None => table.select(&TR).skip(1).collect(),
    };

    let rows: Vec<Vec<String>> = row_elements
        .into_iter()
        .map(|tr| tr.select(&TD).map(cell_text).collect::<Vec<String>>())
        .filter(|cells| !cells.is_empty())
        .collect();

    Ok(PriceTable { headers, rows })
}

/// Dumps the table unprocessed: header row first when there is one.
pub fn write_raw_csv(table: &PriceTable, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut writer = open_csv_writer(path)?;
    if !table.headers.is_empty() {
        writer.write_record(&table.headers)?;
    }
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub struct TcgplayerScraper {
    fetcher: Box<dyn PageFetcher>,
    base_url: String,
    data_dir: String,
}

impl TcgplayerScraper {
    pub fn new(fetcher: Box<dyn PageFetcher>, base_url: &str, data_dir: &str) -> Self {
        TcgplayerScraper {
            fetcher,
            base_url: base_url.to_string(),
            data_dir: data_dir.to_string(),
        }
    }

    /// Fetches one set's price guide and writes it to `<set>_raw.csv`.
    pub async fn scrape_set(&self, set: &PriceGuideSet) -> Result<PathBuf, Box<dyn Error>> {
        let url = set.url(&self.base_url)?;
        let output = data_file_path(&self.data_dir, &set.raw_file_name());
        info!("Scraping {} -> {}", url, output.display());

        let html = self
            .fetcher
            .fetch_html(url.as_str())
            .await
            .map_err(|e| e as Box<dyn Error>)?;
        let table = extract_price_table(&html)?;
        info!("HEADERS: {:?}", table.headers);

        write_raw_csv(&table, &output)?;
        info!("Wrote {} data rows to {}", table.rows.len(), output.display());
        Ok(output)
    }

    /// Scrapes the sets one after the other, stopping at the first failure.
    pub async fn scrape_all(&self, sets: &[PriceGuideSet]) -> Result<Vec<PathBuf>, Box<dyn Error>> {
        let start_time = chrono::prelude::Local::now();
        info!("Starting at {}", date_time_as_string(Some(start_time), None));

        let mut written = Vec::with_capacity(sets.len());
        for set in sets {
            written.push(self.scrape_set(set).await?);
        }

        let end_time = chrono::prelude::Local::now();
        info!(
            "Price guide scrape started at: {}. Finished at: {}. Took: {} seconds and wrote {} files",
            start_time,
            end_time,
            (end_time - start_time).num_seconds(),
            written.len()
        );
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::cards::price_guide_set::{SECRETS_OF_POWER, SPARK_OF_REBELLION};
    use crate::page_fetcher::MockPageFetcher;
    use crate::test::helpers::{read_csv_rows, PRICE_GUIDE_PAGE};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_prefers_price_guide_table() {
        init();
        let table = extract_price_table(PRICE_GUIDE_PAGE).unwrap();

        assert_eq!(
            table.headers,
            strings(&["Product Name", "Printing", "Condition", "Rarity", "Number", "MarketPrice"])
        );
        assert_eq!(table.rows.len(), 3);
        assert_eq!(
            table.rows[0],
            strings(&["Kylo Ren – Rash and Deadly", "Normal", "Near Mint", "Legendary", "001/264", "$3.12"])
        );
        assert_eq!(table.rows[1][4], "271/264");
        assert_eq!(
            table.rows[2],
            strings(&["Secrets of Power Booster Box", "", "", "", "", "$98.00"])
        );
    }

    #[test]
    fn test_extract_falls_back_to_first_table() {
        init();
        let html = "<html><body><table><tr><th>Name</th></tr><tr><td> Yoda </td><td>5</td></tr></table></body></html>";
        let table = extract_price_table(html).unwrap();

        assert!(table.headers.is_empty());
        assert_eq!(table.rows, vec![strings(&["Yoda", "5"])]);
    }

    #[test]
    fn test_extract_skips_first_row_of_bare_table() {
        init();
        let html = "<table><tr><td>Product Name</td><td>Number</td></tr><tr><td>Yoda</td><td>001/252</td></tr></table>";
        let table = extract_price_table(html).unwrap();

        assert!(table.headers.is_empty());
        assert_eq!(table.rows, vec![strings(&["Yoda", "001/252"])]);
    }

    #[test]
    fn test_extract_keeps_first_row_of_explicit_tbody() {
        init();
        let html = "<table><TBODY><tr><td>Yoda</td><td>001/252</td></tr><tr><td>Rey</td><td>002/252</td></tr></TBODY></table>";
        let table = extract_price_table(html).unwrap();

        assert_eq!(
            table.rows,
            vec![strings(&["Yoda", "001/252"]), strings(&["Rey", "002/252"])]
        );
    }

    #[test]
    fn test_extract_without_table_fails() {
        init();
        let result = extract_price_table("<html><body><p>Access denied</p></body></html>");
        assert_eq!(
            result,
            Err("No <table> found. Inspect the page structure.".to_string())
        );
    }

    #[test]
    fn test_write_raw_csv_keeps_ragged_rows() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("raw.csv");
        let table = PriceTable {
            headers: strings(&["Product Name", "Number"]),
            rows: vec![strings(&["Yoda, Old Master", "01/252"]), strings(&["note"])],
        };

        write_raw_csv(&table, &path).unwrap();

        assert_eq!(
            read_csv_rows(&path),
            vec![
                strings(&["Product Name", "Number"]),
                strings(&["Yoda, Old Master", "01/252"]),
                strings(&["note"]),
            ]
        );
    }

    #[tokio::test]
    async fn test_scrape_set_writes_raw_file() {
        init();
        let temp_dir = tempdir().unwrap();
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch_html()
            .withf(|url| url.ends_with("/guides/secrets-of-power"))
            .times(1)
            .returning(|_| Ok(PRICE_GUIDE_PAGE.to_string()));

        let scraper = TcgplayerScraper::new(
            Box::new(fetcher),
            "http://guides.test/guides",
            temp_dir.path().to_str().unwrap(),
        );
        let path = scraper.scrape_set(&SECRETS_OF_POWER).await.unwrap();

        assert_eq!(path, temp_dir.path().join("secrets_of_power_raw.csv"));
        let rows = read_csv_rows(&path);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0][0], "Product Name");
        assert_eq!(rows[2][0], "Kylo Ren – Rash and Deadly (Hyperspace)");
    }

    #[tokio::test]
    async fn test_scrape_all_stops_at_first_failure() {
        init();
        let temp_dir = tempdir().unwrap();
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch_html()
            .withf(|url| url.ends_with("spark-of-rebellion"))
            .times(1)
            .returning(|_| Err("browser crashed".into()));
        fetcher
            .expect_fetch_html()
            .withf(|url| url.ends_with("secrets-of-power"))
            .times(0)
            .returning(|_| Ok(PRICE_GUIDE_PAGE.to_string()));

        let scraper = TcgplayerScraper::new(
            Box::new(fetcher),
            "http://guides.test/guides",
            temp_dir.path().to_str().unwrap(),
        );
        let result = scraper
            .scrape_all(&[SPARK_OF_REBELLION, SECRETS_OF_POWER])
            .await;

        assert!(result.is_err());
        assert!(!temp_dir.path().join("spark_of_rebellion_raw.csv").exists());
    }

    #[tokio::test]
    async fn test_scrape_set_with_http_fetcher() {
        init();
        let temp_dir = tempdir().unwrap();
        let mut server = std::thread::spawn(|| mockito::Server::new())
            .join()
            .unwrap();
        let mock = server
            .mock("GET", "/price-guides/spark-of-rebellion")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(PRICE_GUIDE_PAGE)
            .create();

        let scraper = TcgplayerScraper::new(
            Box::new(crate::page_fetcher::HttpFetcher::new(reqwest::Client::new())),
            &format!("{}/price-guides", server.url()),
            temp_dir.path().to_str().unwrap(),
        );
        let path = scraper.scrape_set(&SPARK_OF_REBELLION).await.unwrap();

        mock.assert();
        assert_eq!(read_csv_rows(&path).len(), 4);
    }
}
