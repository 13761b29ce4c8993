//! Player-name guessing from listing-title tokens.
//!
//! The scan walks adjacent token pairs left to right and stops at the first
//! pair where neither token is a brand stopword and both start uppercase.
//! With no such pair the first token is returned verbatim.

use super::TitlePatterns;

/// Outcome of the player scan, named by which branch produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerGuess<'t> {
    /// First qualifying capitalized, non-brand token pair.
    Pair(&'t str, &'t str),
    /// No pair qualified; first token of the title.
    FirstToken(&'t str),
    /// Title had no tokens.
    Empty,
}

impl PlayerGuess<'_> {
    pub fn into_name(self) -> String {
        match self {
            PlayerGuess::Pair(first, second) => format!("{first} {second}"),
            PlayerGuess::FirstToken(token) => token.to_string(),
            PlayerGuess::Empty => String::new(),
        }
    }
}

/// Strip non-ASCII-letters and uppercase the remainder.
pub fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn starts_uppercase(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

/// Run the ordered pair scan over `title`.
pub fn guess<'t>(title: &'t str, patterns: &TitlePatterns) -> PlayerGuess<'t> {
    let tokens: Vec<&str> = title.split_whitespace().collect();
    let cleaned: Vec<String> = tokens.iter().map(|t| clean_token(t)).collect();

    for (pair, clean_pair) in tokens.windows(2).zip(cleaned.windows(2)) {
        let brand_pair = clean_pair.iter().any(|c| patterns.is_stopword(c));
        if brand_pair {
            continue;
        }

        if starts_uppercase(pair[0]) && starts_uppercase(pair[1]) {
            return PlayerGuess::Pair(pair[0], pair[1]);
        }
    }

    match tokens.first() {
        Some(first) => PlayerGuess::FirstToken(first),
        None => PlayerGuess::Empty,
    }
}
