//! Search query construction for a single year.

/// Topic phrase appended to the year to form the search keyword.
pub const TOPIC_PHRASE: &str = "sports trading card";

/// Largest page size the Finding API accepts per call.
pub const MAX_ENTRIES_PER_PAGE: u32 = 100;

/// A fixed-shape search for one year's listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub year: i32,
    pub keyword: String,
    pub page_size: u32,
}

impl Query {
    /// Build the query for `year`. Any integer is accepted.
    pub fn for_year(year: i32) -> Self {
        Self { year, keyword: format!("{year} {TOPIC_PHRASE}"), page_size: MAX_ENTRIES_PER_PAGE }
    }
}
