use std::fmt;

use regex::Regex;

lazy_static::lazy_static! {
    static ref PARENTHESISED: Regex = Regex::new(r"\(([^()]*)\)").unwrap();
}

/// Finish of a printed card. Variant order is the order rows are listed in
/// within a card, labels the guide invents later sort after all known ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardType {
    Normal,
    Hyperspace,
    Foil,
    HyperspaceFoil,
    Showcase,
    Prestige,
    PrestigeFoil,
    Serialized,
    Other(String),
}

impl CardType {
    /// Reads the type from the first `( ... )` group of a product name.
    pub fn from_product_name(product_name: &str) -> Self {
        PARENTHESISED
            .captures(product_name)
            .and_then(|caps| caps.get(1))
            .map_or(CardType::Normal, |label| Self::from_label(label.as_str()))
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Normal" => CardType::Normal,
            "Hyperspace" => CardType::Hyperspace,
            "Foil" => CardType::Foil,
            "Hyperspace Foil" => CardType::HyperspaceFoil,
            "Showcase" => CardType::Showcase,
            "Prestige" => CardType::Prestige,
            "Prestige Foil" => CardType::PrestigeFoil,
            "Serialized" => CardType::Serialized,
            other => CardType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CardType::Normal => write!(f, "Normal"),
            CardType::Hyperspace => write!(f, "Hyperspace"),
            CardType::Foil => write!(f, "Foil"),
            CardType::HyperspaceFoil => write!(f, "Hyperspace Foil"),
            CardType::Showcase => write!(f, "Showcase"),
            CardType::Prestige => write!(f, "Prestige"),
            CardType::PrestigeFoil => write!(f, "Prestige Foil"),
            CardType::Serialized => write!(f, "Serialized"),
            CardType::Other(label) => write!(f, "{}", label),
        }
    }
}
