use std::hash::{Hash, Hasher};

use regex::Regex;
use crate::utilities::string_manipulators::{normalize_name, normalize_punctuation, strip_accents};

lazy_static::lazy_static! {
    static ref TYPE_LABEL: Regex = Regex::new(r"\([^()]*\)").unwrap();
    static ref VARIANT_SUFFIX: Regex = Regex::new(r"//\s*(.+)").unwrap();
}

const VARIANT_SEPARATOR: &str = " // ";

/// Card name as it should be displayed, plus the pieces the sort order needs.
///
/// Price guide names look like `Jedha City // Freedom Fighters (Hyperspace)`:
/// everything in parentheses is a type label and is dropped, and the part
/// after ` // ` names the variant (other side, pilot, location art).
#[derive(Debug, Clone)]
pub struct CardName {
    pub display: String,
    pub prefix: String,
    pub variant_suffix: String,
    pub group_key: String,
    has_suffix: bool,
}

impl CardName {
    pub fn new(raw: String) -> Result<Self, String> {
        let normalized = normalize_punctuation(&raw);
        let without_labels = TYPE_LABEL.replace_all(&normalized, "");
        let display = strip_accents(&normalize_punctuation(without_labels.trim()));

        if display.trim().is_empty() {
            return Err(format!("Product name '{}' has no card name", raw));
        }

        let prefix = display
            .split(VARIANT_SEPARATOR)
            .next()
            .unwrap_or_default()
            .to_string();
        let has_suffix = display.contains(VARIANT_SEPARATOR);
        let variant_suffix = VARIANT_SUFFIX
            .captures(&display)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let group_key = normalize_name(&display);

        Ok(CardName {
            display,
            prefix,
            variant_suffix,
            group_key,
            has_suffix,
        })
    }

    pub fn has_suffix(&self) -> bool {
        self.has_suffix
    }
}

impl PartialEq for CardName {
    fn eq(&self, other: &Self) -> bool {
        self.group_key == other.group_key
    }
}

impl Eq for CardName {}

impl Hash for CardName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group_key.hash(state);
    }
}
