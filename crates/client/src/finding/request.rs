//! Finding API request parameters.

use serde::Serialize;

use cardscout_core::Query;

/// Query-string parameters for `findItemsByKeywords`.
///
/// Based on the eBay Finding API reference:
/// https://developer.ebay.com/devzone/finding/CallRef/findItemsByKeywords.html
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FindingRequest {
    #[serde(rename = "OPERATION-NAME")]
    pub operation_name: &'static str,

    #[serde(rename = "SERVICE-VERSION")]
    pub service_version: &'static str,

    #[serde(rename = "SECURITY-APPNAME")]
    pub app_id: String,

    #[serde(rename = "RESPONSE-DATA-FORMAT")]
    pub response_format: &'static str,

    pub keywords: String,

    /// Entries per page (1-100).
    #[serde(rename = "paginationInput.entriesPerPage")]
    pub entries_per_page: u32,

    /// 1-based page number.
    #[serde(rename = "paginationInput.pageNumber")]
    pub page_number: u32,

    /// Extra output fields; `PictureURLLarge` adds the large gallery image.
    #[serde(rename = "outputSelector")]
    pub output_selector: &'static str,
}

impl FindingRequest {
    pub const OPERATION: &'static str = "findItemsByKeywords";
    pub const SERVICE_VERSION: &'static str = "1.0.0";

    /// Build the request for one page of `query`.
    pub fn for_page(app_id: &str, query: &Query, page_number: u32) -> Self {
        Self {
            operation_name: Self::OPERATION,
            service_version: Self::SERVICE_VERSION,
            app_id: app_id.to_string(),
            response_format: "JSON",
            keywords: query.keyword.clone(),
            entries_per_page: query.page_size,
            page_number,
            output_selector: "PictureURLLarge",
        }
    }
}
