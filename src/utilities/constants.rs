pub const PRICE_GUIDE_BASE_URL: &str = "https://www.tcgplayer.com/categories/trading-and-collectible-card-games/star-wars-unlimited/price-guides";

pub const PRICE_GUIDE_TABLE_SELECTOR: &str = "table.tcg-table__table";

pub const RAW_FILE_SUFFIX: &str = "_raw.csv";
pub const CLEAN_FILE_SUFFIX: &str = ".csv";

pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_WORKBOOK_FILE: &str = "star_wars_unlimited_inventory.xlsx";
pub const DEFAULT_PAGE_SETTLE_MS: u64 = 5000;

/// Upper bound for how long the browser waits for any table to show up
/// before falling back to the settle delay alone.
pub const TABLE_WAIT_TIMEOUT_SECS: u64 = 30;

/// Sort number for card groups where no row has a numeric collector number.
pub const MISSING_SORT_NUMBER: u32 = 1_000_000_000;

pub const OUTPUT_HEADERS: [&str; 5] = ["Name", "Type", "Rarity", "Number", "Quantity"];
