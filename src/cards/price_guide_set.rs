use std::fmt;

use url::Url;

use crate::utilities::constants::{CLEAN_FILE_SUFFIX, RAW_FILE_SUFFIX};

/// A Star Wars Unlimited set that has a price guide page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceGuideSet {
    pub name: &'static str,
    pub slug: &'static str,
    /// Card count used when token numbers like `020 // T01` are rewritten
    /// to `020/<total>`. Only the first two sets list tokens that way.
    token_total: Option<u16>,
}

pub const SPARK_OF_REBELLION: PriceGuideSet = PriceGuideSet {
    name: "Spark of Rebellion",
    slug: "spark-of-rebellion",
    token_total: Some(252),
};

pub const SHADOWS_OF_THE_GALAXY: PriceGuideSet = PriceGuideSet {
    name: "Shadows of the Galaxy",
    slug: "shadows-of-the-galaxy",
    token_total: Some(262),
};

pub const TWILIGHT_OF_THE_REPUBLIC: PriceGuideSet = PriceGuideSet {
    name: "Twilight of the Republic",
    slug: "twilight-of-the-republic",
    token_total: None,
};

pub const JUMP_TO_LIGHTSPEED: PriceGuideSet = PriceGuideSet {
    name: "Jump to Lightspeed",
    slug: "jump-to-lightspeed",
    token_total: None,
};

pub const LEGENDS_OF_THE_FORCE: PriceGuideSet = PriceGuideSet {
    name: "Legends of the Force",
    slug: "legends-of-the-force",
    token_total: None,
};

pub const SECRETS_OF_POWER: PriceGuideSet = PriceGuideSet {
    name: "Secrets of Power",
    slug: "secrets-of-power",
    token_total: None,
};

const KNOWN_SETS: [PriceGuideSet; 6] = [
    SPARK_OF_REBELLION,
    SHADOWS_OF_THE_GALAXY,
    TWILIGHT_OF_THE_REPUBLIC,
    JUMP_TO_LIGHTSPEED,
    LEGENDS_OF_THE_FORCE,
    SECRETS_OF_POWER,
];

impl PriceGuideSet {
    /// Every known set in release order.
    pub fn all() -> &'static [PriceGuideSet] {
        &KNOWN_SETS
    }

    pub fn token_total(&self) -> Option<u16> {
        self.token_total
    }

    pub fn file_stem(&self) -> String {
        self.slug.replace('-', "_")
    }

    pub fn raw_file_name(&self) -> String {
        format!("{}{}", self.file_stem(), RAW_FILE_SUFFIX)
    }

    pub fn clean_file_name(&self) -> String {
        format!("{}{}", self.file_stem(), CLEAN_FILE_SUFFIX)
    }

    pub fn url(&self, base_url: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}/{}", base_url.trim_end_matches('/'), self.slug))
    }
}

impl fmt::Display for PriceGuideSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
