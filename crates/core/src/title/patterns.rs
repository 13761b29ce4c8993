//! Compiled title patterns, built once per run and shared by reference.

use std::collections::HashSet;

use regex::Regex;

/// Grading authority followed by a numeric grade, e.g. `PSA 10` or `bgs9.5`.
const GRADE_PATTERN: &str = r"(?i)\b(PSA|BGS|SGC)\s*(\d+(?:\.\d)?)\b";

/// Card-number label (`#`, `No.`, `Card`, `Card #`) followed by up to four digits and an optional letter.
const CARD_NO_PATTERN: &str = r"(?i)(?:#|No\.|Card\s*#?)\s*(\d{1,4}[A-Z]?)";

/// Manufacturer names and rookie jargon that never form part of a player name.
pub const BRAND_STOPWORDS: &[&str] = &[
    "TOPPS",
    "UPPER",
    "DECK",
    "FLEER",
    "DONRUSS",
    "BOWMAN",
    "O-PEE-CHEE",
    "PANINI",
    "SELECT",
    "PRIZM",
    "OPTIC",
    "CHROME",
    "HOOPS",
    "STADIUM",
    "CLUB",
    "SKYBOX",
    "SCORE",
    "LEAF",
    "RC",
    "ROOKIE",
];

/// Immutable pattern set consumed by [`TitleParser`](super::TitleParser).
#[derive(Debug, Clone)]
pub struct TitlePatterns {
    pub(crate) grade: Regex,
    pub(crate) card_number: Regex,
    pub(crate) stopwords: HashSet<&'static str>,
}

impl TitlePatterns {
    /// Compile the built-in grade and card-number patterns with the default brand stopwords.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            grade: Regex::new(GRADE_PATTERN)?,
            card_number: Regex::new(CARD_NO_PATTERN)?,
            stopwords: BRAND_STOPWORDS.iter().copied().collect(),
        })
    }

    /// Whether an already-cleaned token is a brand stopword.
    pub fn is_stopword(&self, cleaned: &str) -> bool {
        self.stopwords.contains(cleaned)
    }
}
