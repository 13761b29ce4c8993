//! Year-by-year retrieval and output.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use cardscout_client::{FindingClient, FindingConfig, ImageStore, RetrievalOptions, Retriever, RetryPolicy};
use cardscout_core::{AppConfig, CombinedResultSet, Query, TitleParser, TitlePatterns, output, parse_years};

/// Outcome of a scrape across all requested years.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// CSV files written, per-year files first.
    pub written: Vec<PathBuf>,
    /// Years abandoned after a failed page.
    pub failed_years: Vec<i32>,
    /// Rows retrieved across successful years.
    pub rows: usize,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed_years.is_empty()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
    }
}

/// Scrape every year in `years_spec` and write CSVs per `config`.
///
/// Configuration problems (bad year spec, missing app id) fail before any
/// request is sent. A year that exhausts its retries is logged and skipped;
/// the summary then reports failure.
pub async fn run(years_spec: &str, config: &AppConfig) -> Result<RunSummary> {
    let years = parse_years(years_spec)?;
    config.require_app_id()?;

    let client = FindingClient::new(FindingConfig::from_app_config(config)?)?;
    let patterns = TitlePatterns::new().context("failed to compile title patterns")?;
    let images = config
        .download_images
        .then(|| ImageStore::new(client.http().clone(), config.image_dir.clone()));

    let mut retriever = Retriever::new(
        &client,
        TitleParser::new(&patterns),
        RetrievalOptions::from(config),
        RetryPolicy::from(&config.retry),
    );
    if let Some(store) = &images {
        retriever = retriever.with_images(store);
    }

    tracing::info!(years = ?years, "starting scrape");

    let mut combined = CombinedResultSet::new();
    let mut summary = RunSummary::default();

    for year in years {
        let query = Query::for_year(year);
        match retriever.retrieve_year(&query).await {
            Ok(set) => {
                if set.is_empty() {
                    tracing::info!(year, "no listings found");
                }
                let written = output::write_year(&config.output_dir, year, set.records())
                    .with_context(|| format!("failed to write CSV for {year}"))?;
                summary.written.extend(written);
                combined.extend(set);
            }
            Err(err) => {
                tracing::error!(year, "giving up on year: {err}");
                summary.failed_years.push(year);
            }
        }
    }

    if config.combined {
        let written =
            output::write_combined(&config.output_dir, combined.records()).context("failed to write combined CSV")?;
        summary.written.extend(written);
    }

    summary.rows = combined.len();
    tracing::info!(rows = summary.rows, years = combined.years().len(), "scrape finished");

    if !summary.is_success() {
        tracing::error!(failed = ?summary.failed_years, "some years failed");
    }
    Ok(summary)
}
