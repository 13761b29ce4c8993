//! Finding API response navigation.
//!
//! The JSON format wraps every value in a single-element array, e.g.
//! `{"findItemsByKeywordsResponse": [{"searchResult": [{"item": [...]}]}]}`.
//! Missing keys or indices are expected API variability: they degrade to an
//! empty item list or an unknown (zero) page count, never to an error.

use serde_json::Value;

use cardscout_core::RawItem;

const ITEMS_PATH: &str = "/findItemsByKeywordsResponse/0/searchResult/0/item";
const TOTAL_PAGES_PATH: &str = "/findItemsByKeywordsResponse/0/paginationOutput/0/totalPages/0";

/// Items of one page, in response order. Empty if the item array is absent.
pub fn extract_items(resp: &Value) -> Vec<RawItem> {
    resp.pointer(ITEMS_PATH)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(raw_item).collect())
        .unwrap_or_default()
}

/// Total page count reported by the API, or 0 if absent or non-numeric.
pub fn total_pages(resp: &Value) -> u32 {
    match resp.pointer(TOTAL_PAGES_PATH) {
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()).unwrap_or(0),
        _ => 0,
    }
}

/// Read one item, taking the first element of each wrapped field.
pub fn raw_item(item: &Value) -> RawItem {
    RawItem {
        item_id: first_string(item, "itemId"),
        title: first_string(item, "title"),
        item_url: first_string(item, "viewItemURL"),
        gallery_url: first_string(item, "galleryURL"),
    }
}

fn first_string(item: &Value, key: &str) -> String {
    let value = match item.get(key) {
        Some(Value::Array(values)) => values.first(),
        other => other,
    };

    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
