//! Heuristic attribute extraction from listing titles.
//!
//! ### Sub-extractions
//! Each runs independently on the full title:
//! - **Grade**: leftmost `PSA`/`BGS`/`SGC` followed by a numeric grade, uppercased
//!   and space-joined (`"psa10"` -> `"PSA 10"`).
//! - **Card number**: leftmost `#`/`No.`/`Card`/`Card #` label followed by 1-4
//!   digits and an optional letter; only the number is kept.
//! - **Player**: see [`player`] for the ordered pair scan.
//!
//! Extraction is total: every input string yields a value.

pub mod patterns;
pub mod player;

pub use patterns::{BRAND_STOPWORDS, TitlePatterns};
pub use player::PlayerGuess;

/// Attributes derived purely from a title string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedAttributes {
    pub player: String,
    pub grade: Option<String>,
    pub card_number: Option<String>,
}

/// Title parser borrowing a shared [`TitlePatterns`].
#[derive(Debug, Clone, Copy)]
pub struct TitleParser<'p> {
    patterns: &'p TitlePatterns,
}

impl<'p> TitleParser<'p> {
    pub fn new(patterns: &'p TitlePatterns) -> Self {
        Self { patterns }
    }

    /// Extract player, grade and card number from `title`.
    pub fn parse(&self, title: &str) -> ExtractedAttributes {
        ExtractedAttributes { player: self.player(title), grade: self.grade(title), card_number: self.card_number(title) }
    }

    pub fn grade(&self, title: &str) -> Option<String> {
        let caps = self.patterns.grade.captures(title)?;
        Some(format!("{} {}", caps[1].to_uppercase(), &caps[2]))
    }

    pub fn card_number(&self, title: &str) -> Option<String> {
        let caps = self.patterns.card_number.captures(title)?;
        Some(caps[1].to_string())
    }

    pub fn player(&self, title: &str) -> String {
        player::guess(title, self.patterns).into_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(title: &str) -> ExtractedAttributes {
        let patterns = TitlePatterns::new().unwrap();
        TitleParser::new(&patterns).parse(title)
    }

    #[test]
    fn test_full_title() {
        let attrs = parse("2020 Topps Chrome PSA 10 Mike Trout #27");
        assert_eq!(attrs.player, "Mike Trout");
        assert_eq!(attrs.grade.as_deref(), Some("PSA 10"));
        assert_eq!(attrs.card_number.as_deref(), Some("27"));
    }

    #[test]
    fn test_grade_variants() {
        assert_eq!(parse("1989 Upper Deck bgs 9.5 Griffey").grade.as_deref(), Some("BGS 9.5"));
        assert_eq!(parse("Jordan PSA10 gem").grade.as_deref(), Some("PSA 10"));
        assert_eq!(parse("Sgc 8 card").grade.as_deref(), Some("SGC 8"));
    }

    #[test]
    fn test_leftmost_grade_wins() {
        assert_eq!(parse("SGC 8 crossover from PSA 9").grade.as_deref(), Some("SGC 8"));
    }

    #[test]
    fn test_grade_absent() {
        assert_eq!(parse("1986 Fleer Michael Jordan #57").grade, None);
        assert_eq!(parse("CGC 9.8 Pikachu").grade, None);
        assert_eq!(parse("PSA graded").grade, None);
    }

    #[test]
    fn test_grade_requires_word_boundary() {
        assert_eq!(parse("XPSA 10").grade, None);
    }

    #[test]
    fn test_card_number_labels() {
        assert_eq!(parse("Mike Trout #27").card_number.as_deref(), Some("27"));
        assert_eq!(parse("Mike Trout No. 27").card_number.as_deref(), Some("27"));
        assert_eq!(parse("Mike Trout Card #27").card_number.as_deref(), Some("27"));
        assert_eq!(parse("Mike Trout card 27").card_number.as_deref(), Some("27"));
        assert_eq!(parse("Mike Trout # 27").card_number.as_deref(), Some("27"));
    }

    #[test]
    fn test_card_number_with_letter_suffix() {
        assert_eq!(parse("1990 Leaf #245A Sammy Sosa").card_number.as_deref(), Some("245A"));
    }

    #[test]
    fn test_card_number_first_match_wins() {
        assert_eq!(parse("Lot #12 featuring Card #99").card_number.as_deref(), Some("12"));
    }

    #[test]
    fn test_card_number_absent() {
        assert_eq!(parse("1986 Fleer Michael Jordan PSA 8").card_number, None);
    }

    #[test]
    fn test_single_token_title() {
        let attrs = parse("Jordan");
        assert_eq!(attrs.player, "Jordan");
        assert_eq!(attrs.grade, None);
        assert_eq!(attrs.card_number, None);
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(parse(""), ExtractedAttributes::default());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let patterns = TitlePatterns::new().unwrap();
        let parser = TitleParser::new(&patterns);
        let title = "1993 SP Derek Jeter Foil RC #279 BGS 9.5";
        assert_eq!(parser.parse(title), parser.parse(title));
    }
}
