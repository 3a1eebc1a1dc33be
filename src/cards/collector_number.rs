use log::debug;

const TOKEN_SEPARATOR: &str = "//";

/// The cleaned `Number` column of a price guide, e.g. `045/252`, `T05` or
/// `020 // T01` for tokens printed with a card number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorNumber {
    cleaned_value: String,
}

impl CollectorNumber {
    /// Rows whose number does not start with a digit are headers, sealed
    /// product or notes and are rejected. When the set has a `token_total`,
    /// token numbers below 100 are rewritten to `NNN/<token_total>`.
    pub fn new(collector_number: &str, token_total: Option<u16>) -> Result<Self, String> {
        if !collector_number.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(format!(
                "'{}' is not a collector number",
                collector_number
            ));
        }

        let mut number = collector_number.to_string();
        if let Some(total) = token_total {
            if number.contains(TOKEN_SEPARATOR) {
                if let Some(leading) = Self::leading_number(&number).filter(|n| *n < 100) {
                    debug!("Renumbering token {} to {:03}/{}", number, leading, total);
                    number = format!("{:03}/{}", leading, total);
                }
            }
        }

        let cleaned_value = number
            .split(TOKEN_SEPARATOR)
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();

        Ok(Self { cleaned_value })
    }

    fn leading_number(value: &str) -> Option<u32> {
        let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }

    /// The number before any `/`, used to place a card within its set.
    pub fn base_number(&self) -> Option<u32> {
        Self::leading_number(&self.cleaned_value)
    }

    pub fn cleaned(&self) -> &str {
        &self.cleaned_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers_are_kept() {
        let number = CollectorNumber::new("045/252", None).unwrap();
        assert_eq!(number.cleaned(), "045/252");
        assert_eq!(number.base_number(), Some(45));
    }

    #[test]
    fn test_non_numeric_rows_are_rejected() {
        assert!(CollectorNumber::new("T05", None).is_err());
        assert!(CollectorNumber::new("", None).is_err());
        assert!(CollectorNumber::new(" 12/252", None).is_err());
        assert!(CollectorNumber::new("Booster Box", Some(252)).is_err());
    }

    #[test]
    fn test_part_after_double_slash_is_dropped() {
        let number = CollectorNumber::new("212/262 // T03", None).unwrap();
        assert_eq!(number.cleaned(), "212/262");
    }

    #[test]
    fn test_token_numbers_are_rewritten_for_sets_with_a_total() {
        let number = CollectorNumber::new("020 // T01", Some(252)).unwrap();
        assert_eq!(number.cleaned(), "020/252");
        assert_eq!(number.base_number(), Some(20));

        let number = CollectorNumber::new("7 // T02", Some(262)).unwrap();
        assert_eq!(number.cleaned(), "007/262");
    }

    #[test]
    fn test_large_numbers_are_not_rewritten() {
        let number = CollectorNumber::new("150 // T01", Some(252)).unwrap();
        assert_eq!(number.cleaned(), "150");
        assert_eq!(number.base_number(), Some(150));
    }

    #[test]
    fn test_tokens_without_total_are_only_cut() {
        let number = CollectorNumber::new("020 // T01", None).unwrap();
        assert_eq!(number.cleaned(), "020");
    }
}
