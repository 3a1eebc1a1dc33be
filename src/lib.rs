pub mod cards;
pub mod inventory_workbook;
pub mod page_fetcher;
pub mod price_guide_cleaner;
pub mod tcgplayer_scraper;
pub mod utilities;

#[cfg(test)]
mod test;
