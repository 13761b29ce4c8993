//! Paginated retrieval of one year's listings.
//!
//! ### Loop
//! 1. Fetch the current page, retrying the same page per [`RetryPolicy`].
//! 2. Stop on an empty item list.
//! 3. Parse, assemble, and append every item.
//! 4. Stop if the API reported a total and this page reached it, or if the
//!    page cap is set and reached; otherwise sleep for the inter-page delay
//!    and advance.
//!
//! The inter-page delay runs only between successful pages, never after the
//! last one. Retry cooldowns come from the policy and never add the
//! inter-page delay.

pub mod retry;

pub use retry::{Backoff, RetryPolicy};

use std::time::Duration;

use cardscout_core::record::{assemble, image_file_stem};
use cardscout_core::{AppConfig, NormalizedRecord, Query, RawItem, TitleParser, YearResultSet};
use serde_json::Value;

use crate::finding::{FindingError, PageSource, extract_items, total_pages};
use crate::images::ImageStore;

/// Per-year retrieval options.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievalOptions {
    /// Maximum pages per year; 0 means uncapped.
    pub max_pages: u32,
    /// Pause between successful page fetches.
    pub delay: Duration,
    /// Log raw responses at debug level.
    pub debug: bool,
}

impl Default for RetrievalOptions {
    fn default() -> Self {
        Self { max_pages: 0, delay: Duration::from_secs(1), debug: false }
    }
}

impl From<&AppConfig> for RetrievalOptions {
    fn from(config: &AppConfig) -> Self {
        Self { max_pages: config.max_pages, delay: config.delay(), debug: config.debug }
    }
}

/// Errors that end a year's retrieval early.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// The page kept failing until the retry budget ran out.
    #[error("page {page} failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        page: u32,
        attempts: u32,
        #[source]
        source: FindingError,
    },

    /// The fetch failed in a way retrying cannot fix.
    #[error("page {page} failed: {source}")]
    Fatal {
        page: u32,
        #[source]
        source: FindingError,
    },
}

/// Drives page fetches for one query at a time.
pub struct Retriever<'a, S: PageSource> {
    source: &'a S,
    parser: TitleParser<'a>,
    options: RetrievalOptions,
    retry: RetryPolicy,
    images: Option<&'a ImageStore>,
}

impl<'a, S: PageSource> Retriever<'a, S> {
    pub fn new(source: &'a S, parser: TitleParser<'a>, options: RetrievalOptions, retry: RetryPolicy) -> Self {
        Self { source, parser, options, retry, images: None }
    }

    /// Download each listing's gallery image into `store`.
    pub fn with_images(mut self, store: &'a ImageStore) -> Self {
        self.images = Some(store);
        self
    }

    /// Fetch every page of `query` and return its records in page order.
    ///
    /// # Errors
    ///
    /// Returns `RetrievalError` only when a page exhausts its retries or fails
    /// non-transiently; records gathered before that point are discarded.
    pub async fn retrieve_year(&self, query: &Query) -> Result<YearResultSet, RetrievalError> {
        let mut results = YearResultSet::new(query.year);
        let mut page: u32 = 1;
        let mut fetched_pages: u32 = 0;

        loop {
            let resp = self.fetch_with_retry(query, page).await?;
            if self.options.debug {
                tracing::debug!(year = query.year, page, response = %resp, "raw response");
            }

            let items = extract_items(&resp);
            if items.is_empty() {
                tracing::debug!(year = query.year, page, "no more results");
                break;
            }

            let total = total_pages(&resp);
            tracing::info!("{}: page {}/{} - {} items", query.year, page, total, items.len());

            for item in &items {
                results.push(self.process_item(query.year, item).await);
            }
            fetched_pages += 1;

            if total != 0 && page >= total {
                break;
            }
            if self.options.max_pages != 0 && fetched_pages >= self.options.max_pages {
                tracing::debug!(year = query.year, fetched_pages, "page cap reached");
                break;
            }
            page += 1;
            tokio::time::sleep(self.options.delay).await;
        }

        Ok(results)
    }

    async fn fetch_with_retry(&self, query: &Query, page: u32) -> Result<Value, RetrievalError> {
        let mut failures: u32 = 0;

        loop {
            let err = match self.source.fetch_page(query, page).await {
                Ok(resp) => return Ok(resp),
                Err(err) => err,
            };

            if !err.is_transient() {
                return Err(RetrievalError::Fatal { page, source: err });
            }

            failures = failures.saturating_add(1);
            let Some(delay) = self.retry.delay_for(failures) else {
                return Err(RetrievalError::RetriesExhausted { page, attempts: failures, source: err });
            };

            tracing::warn!(year = query.year, page, attempt = failures, "fetch failed: {err} - retrying in {delay:?}");
            tokio::time::sleep(delay).await;
        }
    }

    async fn process_item(&self, year: i32, item: &RawItem) -> NormalizedRecord {
        let attrs = self.parser.parse(&item.title);

        let Some(store) = self.images else {
            return assemble(year, item, attrs);
        };

        let dest = store.path_for(year, &image_file_stem(&attrs, &item.item_id));
        if !item.gallery_url.is_empty()
            && let Err(err) = store.download(&item.gallery_url, &dest).await
        {
            tracing::warn!(url = %item.gallery_url, "image download failed: {err}");
        }

        let mut record = assemble(year, item, attrs);
        record.image = dest.display().to_string();
        record
    }
}
