use std::cmp::Ordering;

use super::{
    card_type::CardType, cardname::CardName, collector_number::CollectorNumber,
    inventory_row::InventoryRow, price_guide_set::PriceGuideSet, raw_price_row::RawPriceRow,
};
use crate::utilities::{constants::MISSING_SORT_NUMBER, string_manipulators::normalize_punctuation};

/// A price guide row that survived cleaning.
#[derive(Debug, Clone)]
pub struct GuideCard {
    pub name: CardName,
    pub card_type: CardType,
    pub rarity: String,
    pub number: CollectorNumber,
    /// Shared by every row of the same card and its ` // ` variants.
    pub sort_number: u32,
}

impl GuideCard {
    pub fn from_raw_row(row: &RawPriceRow, set: &PriceGuideSet) -> Result<Self, String> {
        let number = CollectorNumber::new(&row.number, set.token_total())?;
        let product_name = normalize_punctuation(&row.product_name);
        let card_type = CardType::from_product_name(&product_name);
        let name = CardName::new(product_name)?;

        Ok(GuideCard {
            name,
            card_type,
            rarity: row.rarity.clone(),
            number,
            sort_number: MISSING_SORT_NUMBER,
        })
    }

    /// Inventory order: card position in the set, then base name, plain
    /// card before its variants, variant name, finish and finally full name.
    pub fn inventory_order(&self, other: &Self) -> Ordering {
        self.sort_number
            .cmp(&other.sort_number)
            .then_with(|| self.name.prefix.cmp(&other.name.prefix))
            .then_with(|| self.name.has_suffix().cmp(&other.name.has_suffix()))
            .then_with(|| self.name.variant_suffix.cmp(&other.name.variant_suffix))
            .then_with(|| self.card_type.cmp(&other.card_type))
            .then_with(|| self.name.display.cmp(&other.name.display))
    }

    pub fn to_inventory_row(&self) -> InventoryRow {
        InventoryRow {
            name: self.name.display.clone(),
            card_type: self.card_type.to_string(),
            rarity: self.rarity.clone(),
            number: self.number.cleaned().to_string(),
            quantity: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cards::price_guide_set::{SECRETS_OF_POWER, SPARK_OF_REBELLION};
    use crate::test::helpers::raw_row;

    use super::*;

    #[test]
    fn test_card_from_raw_row() {
        let row = raw_row("Han Solo – Audacious Smuggler (Hyperspace)", "Legendary", "201/252");
        let card = GuideCard::from_raw_row(&row, &SECRETS_OF_POWER).unwrap();

        assert_eq!(card.name.display, "Han Solo - Audacious Smuggler");
        assert_eq!(card.card_type, CardType::Hyperspace);
        assert_eq!(card.number.base_number(), Some(201));
        assert_eq!(
            card.to_inventory_row(),
            InventoryRow {
                name: "Han Solo - Audacious Smuggler".to_string(),
                card_type: "Hyperspace".to_string(),
                rarity: "Legendary".to_string(),
                number: "201/252".to_string(),
                quantity: "".to_string(),
            }
        );
    }

    #[test]
    fn test_token_row_uses_set_total() {
        let row = raw_row("Shield Token", "Common", "03 // T01");
        let card = GuideCard::from_raw_row(&row, &SPARK_OF_REBELLION).unwrap();
        assert_eq!(card.number.cleaned(), "003/252");
    }

    #[test]
    fn test_rows_without_number_are_rejected() {
        let row = raw_row("Spark of Rebellion Booster Box", "", "");
        assert!(GuideCard::from_raw_row(&row, &SPARK_OF_REBELLION).is_err());
    }

    #[test]
    fn test_plain_card_sorts_before_its_variants() {
        let plain = GuideCard::from_raw_row(&raw_row("Jedha City", "Common", "023/252"), &SECRETS_OF_POWER).unwrap();
        let variant = GuideCard::from_raw_row(
            &raw_row("Jedha City // Scarif", "Common", "023/252"),
            &SECRETS_OF_POWER,
        )
        .unwrap();

        assert_eq!(plain.inventory_order(&variant), Ordering::Less);
        assert_eq!(variant.inventory_order(&plain), Ordering::Greater);
    }
}
