/// One row of a scraped price guide. Price columns are not read.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct RawPriceRow {
    pub product_name: String,
    pub rarity: String,
    pub number: String,
}
