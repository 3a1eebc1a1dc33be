use log::{error, info};

use swu_price_guide::cards::price_guide_set::PriceGuideSet;
use swu_price_guide::page_fetcher::fetcher_from_config;
use swu_price_guide::tcgplayer_scraper::TcgplayerScraper;
use swu_price_guide::utilities::config::CONFIG;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    info!("Starting with {:?}", *CONFIG);

    let scraper = TcgplayerScraper::new(
        fetcher_from_config(&CONFIG),
        &CONFIG.base_url,
        &CONFIG.data_dir,
    );

    if let Err(e) = scraper.scrape_all(PriceGuideSet::all()).await {
        error!("Scrape failed: {}", e);
        return Err(e);
    }
    Ok(())
}
