use chrono::{DateTime, Local};
use regex::Regex;
use unicode_normalization::{char::canonical_combining_class, UnicodeNormalization};

lazy_static::lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Typographic punctuation and its plain ASCII replacement.
const PUNCTUATION_REPLACEMENTS: [(char, &str); 13] = [
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201B}', "'"),
    ('\u{201A}', "'"),
    ('\u{2032}', "'"),
    ('\u{02BC}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{201E}', "\""),
    ('\u{2013}', "-"),
    ('\u{2014}', "-"),
    ('\u{2015}', "-"),
    ('\u{2026}', "..."),
];

/// Pound, copyright, registered, euro and trademark signs.
const DROPPED_SYMBOLS: [char; 5] = ['\u{00A3}', '\u{00A9}', '\u{00AE}', '\u{20AC}', '\u{2122}'];

/// Known misspellings in the price guides, applied to normalized names.
const NAME_ALIASES: [(&str, &str); 1] = [("wisecracking wheelman", "wisecrack wheelman")];

pub fn date_time_as_string(dt: Option<DateTime<Local>>, format: Option<&str>) -> String {
    dt.unwrap_or(Local::now())
        .format(format.unwrap_or("%d_%m_%Y-%H-%M"))
        .to_string()
}

/// Repairs text that was UTF-8 but got decoded as Latin-1 somewhere on the way
/// ("PadmÃ©" -> "Padmé"). Anything that does not round-trip is returned as is.
pub fn fix_mojibake(text: &str) -> String {
    let latin1: Option<Vec<u8>> = text.chars().map(|c| u8::try_from(c).ok()).collect();

    latin1
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_else(|| text.to_string())
}

pub fn normalize_punctuation(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for c in fix_mojibake(text).chars() {
        if DROPPED_SYMBOLS.contains(&c) {
            continue;
        }
        match PUNCTUATION_REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => normalized.push_str(to),
            None => normalized.push(c),
        }
    }
    normalized
}

pub fn strip_accents(text: &str) -> String {
    text.nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect()
}

/// Key used to decide which rows are the same card.
pub fn normalize_name(name: &str) -> String {
    let name = strip_accents(&normalize_punctuation(name));
    let mut normalized = WHITESPACE_RUN
        .replace_all(name.trim(), " ")
        .to_lowercase();

    for (from, to) in NAME_ALIASES {
        normalized = normalized.replace(from, to);
    }
    normalized
}
