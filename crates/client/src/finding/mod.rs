//! eBay Finding API client.
//!
//! Issues one `findItemsByKeywords` page request per call and returns the raw
//! decoded JSON. No retrying happens here; see [`crate::retrieval`].
//!
//! ### Specification
//!
//! - **Endpoint**: `https://svcs.ebay.com/services/search/FindingService/v1`
//! - **Authentication**: application id in the `SECURITY-APPNAME` parameter.
//! - **Timeout**: 30s per request.
//! - **Output selector**: `PictureURLLarge` for the large gallery image.

pub mod error;
pub mod request;
pub mod response;

pub use error::FindingError;
pub use request::FindingRequest;
pub use response::{extract_items, total_pages};

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use cardscout_core::{AppConfig, Query, config::DEFAULT_ENDPOINT};
use reqwest::header;
use serde_json::Value;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "cardscout/0.1";

/// Finding API client configuration.
#[derive(Debug, Clone)]
pub struct FindingConfig {
    /// Application id sent as SECURITY-APPNAME.
    pub app_id: String,
    /// Endpoint URL (default: https://svcs.ebay.com/services/search/FindingService/v1).
    pub base_url: String,
    /// Request timeout (default: 30s).
    pub timeout: Duration,
    /// User-agent string (default: cardscout/0.x).
    pub user_agent: String,
}

impl Default for FindingConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            base_url: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FindingConfig {
    /// Build from the loaded application config.
    ///
    /// Fails with `MissingAppId` if no credential was configured.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, FindingError> {
        let app_id = config.require_app_id().map_err(|_| FindingError::MissingAppId)?;
        Ok(Self {
            app_id: app_id.to_string(),
            base_url: config.endpoint.clone(),
            timeout: config.timeout(),
            ..Default::default()
        })
    }
}

/// Source of raw search-result pages.
///
/// Implemented by [`FindingClient`]; the retrieval controller only depends on this trait.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one 1-based page of `query` and return the decoded response.
    async fn fetch_page(&self, query: &Query, page: u32) -> Result<Value, FindingError>;
}

/// eBay Finding API client.
#[derive(Debug, Clone)]
pub struct FindingClient {
    http: reqwest::Client,
    config: FindingConfig,
}

impl FindingClient {
    /// Create a new client with the given configuration.
    pub fn new(config: FindingConfig) -> Result<Self, FindingError> {
        if config.app_id.trim().is_empty() {
            return Err(FindingError::MissingAppId);
        }

        url::Url::parse(&config.base_url).map_err(|e| FindingError::InvalidEndpoint(format!("{}: {e}", config.base_url)))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| FindingError::Network(Arc::new(e)))?;

        Ok(Self { http, config })
    }

    /// Underlying HTTP client, shared with the image store.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Execute one page request.
    pub async fn find_items(&self, req: &FindingRequest) -> Result<Value, FindingError> {
        let start = Instant::now();

        tracing::debug!(keywords = %req.keywords, page = req.page_number, "querying Finding API");

        let http_response = self
            .http
            .get(&self.config.base_url)
            .header(header::ACCEPT, "application/json")
            .query(req)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("Finding API response status: {}", status);

        if !status.is_success() {
            return Err(FindingError::HttpError { status: status.as_u16() });
        }

        let bytes = http_response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes).map_err(|e| FindingError::Parse(e.to_string()))?;

        tracing::debug!("page {} fetched in {:?} ({} bytes)", req.page_number, start.elapsed(), bytes.len());

        Ok(body)
    }
}

#[async_trait]
impl PageSource for FindingClient {
    async fn fetch_page(&self, query: &Query, page: u32) -> Result<Value, FindingError> {
        let req = FindingRequest::for_page(&self.config.app_id, query, page);
        self.find_items(&req).await
    }
}
