use log::{error, info};

use swu_price_guide::cards::price_guide_set::PriceGuideSet;
use swu_price_guide::price_guide_cleaner::PriceGuideCleaner;
use swu_price_guide::utilities::config::CONFIG;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    info!("Cleaning price guides in {}", CONFIG.data_dir);

    let cleaner = PriceGuideCleaner::new(&CONFIG.data_dir);
    match cleaner.clean_all(PriceGuideSet::all()) {
        Ok(written) => {
            info!("Cleaned {} price guides", written.len());
            Ok(())
        }
        Err(e) => {
            error!("Cleaning failed: {}", e);
            Err(e)
        }
    }
}
