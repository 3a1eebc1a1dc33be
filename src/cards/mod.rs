pub mod card_type;
pub mod cardname;
pub mod collector_number;
pub mod guide_card;
pub mod inventory_row;
pub mod price_guide_set;
pub mod raw_price_row;
