use log::info;

use swu_price_guide::cards::price_guide_set::PriceGuideSet;
use swu_price_guide::inventory_workbook::combine_to_workbook;
use swu_price_guide::utilities::config::CONFIG;
use swu_price_guide::utilities::file_management::data_file_path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output = data_file_path(&CONFIG.data_dir, &CONFIG.workbook_file);
    info!("Combining cleaned price guides into {}", output.display());

    combine_to_workbook(PriceGuideSet::all(), &CONFIG.data_dir, &output)?;
    Ok(())
}
