//! Raw listing items, normalized records, and their CSV row shape.

use serde::{Deserialize, Serialize};

use crate::title::ExtractedAttributes;

/// Placeholder written for an absent grade or card number.
pub const NOT_AVAILABLE: &str = "N/A";

/// One listing as returned by the search API. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItem {
    pub item_id: String,
    pub title: String,
    pub item_url: String,
    pub gallery_url: String,
}

/// One listing merged with its extracted attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub year: i32,
    pub title: String,
    pub player: String,
    pub grade: Option<String>,
    pub card_number: Option<String>,
    pub item_url: String,
    /// Gallery image URL, or the local file path when images are downloaded.
    pub image: String,
}

/// Merge a raw item with its attributes for `year`. The image column starts as the gallery URL.
pub fn assemble(year: i32, item: &RawItem, attrs: ExtractedAttributes) -> NormalizedRecord {
    NormalizedRecord {
        year,
        title: item.title.clone(),
        player: attrs.player,
        grade: attrs.grade,
        card_number: attrs.card_number,
        item_url: item.item_url.clone(),
        image: item.gallery_url.clone(),
    }
}

/// Filesystem-safe stem `{player}_{card}_{grade}_{item_id}`.
///
/// Spaces in the player name become underscores. Path separators anywhere in
/// the stem (including the one in `N/A`) become `-` so the stem stays a single
/// path component.
pub fn image_file_stem(attrs: &ExtractedAttributes, item_id: &str) -> String {
    let stem = format!(
        "{}_{}_{}_{}",
        attrs.player.replace(' ', "_"),
        attrs.card_number.as_deref().unwrap_or(NOT_AVAILABLE),
        attrs.grade.as_deref().unwrap_or(NOT_AVAILABLE),
        item_id
    );
    stem.replace(['/', '\\'], "-")
}

/// Serialized row. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRow {
    pub year: i32,
    pub title: String,
    pub player: String,
    pub grade: String,
    pub card_no: String,
    pub item_url: String,
    pub image: String,
}

impl From<&NormalizedRecord> for CsvRow {
    fn from(record: &NormalizedRecord) -> Self {
        CsvRow {
            year: record.year,
            title: record.title.clone(),
            player: record.player.clone(),
            grade: record.grade.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            card_no: record.card_number.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            item_url: record.item_url.clone(),
            image: record.image.clone(),
        }
    }
}
