use serde::Serialize;

/// A row of the cleaned inventory CSV. `Quantity` is left for the owner to fill in.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct InventoryRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub card_type: String,
    #[serde(rename = "Rarity")]
    pub rarity: String,
    #[serde(rename = "Number")]
    pub number: String,
    #[serde(rename = "Quantity")]
    pub quantity: String,
}
