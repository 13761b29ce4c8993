//! cardscout entry point.
//!
//! Scrapes eBay sports-card listings for one or more years and writes one CSV
//! per year, plus an optional combined CSV. Logging goes to stderr.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use cardscout_core::AppConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod run;

#[derive(Debug, Parser)]
#[command(name = "cardscout")]
#[command(about = "Scrape eBay sports cards by year (bulk, all pages)")]
#[command(version)]
struct Cli {
    /// Year, comma list, or range(s), e.g. 1986, 1980-1985, 1993,1997
    years: String,

    /// Destination folder for CSV files (default: ./output)
    #[arg(short, long)]
    outdir: Option<PathBuf>,

    /// Stop after N pages per year (0 = all)
    #[arg(long)]
    max_pages: Option<u32>,

    /// Pause between page requests in seconds
    #[arg(long, value_parser = parse_delay)]
    delay: Option<Duration>,

    /// Emit cards_all.csv with every row scraped
    #[arg(long)]
    combined: bool,

    /// Verbose logging with raw JSON dumps
    #[arg(long)]
    debug: bool,

    /// Download gallery images under images/<year>/
    #[arg(long)]
    download_images: bool,

    /// Retries per page before giving up on a year
    #[arg(long)]
    max_retries: Option<u32>,

    /// Retry failed pages forever at a fixed interval
    #[arg(long, conflicts_with = "max_retries")]
    retry_forever: bool,
}

impl Cli {
    /// Apply flags on top of the loaded configuration.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(outdir) = &self.outdir {
            config.output_dir = outdir.clone();
        }
        if let Some(max_pages) = self.max_pages {
            config.max_pages = max_pages;
        }
        if let Some(delay) = self.delay {
            config.delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        }
        if let Some(max_retries) = self.max_retries {
            config.retry.max_retries = max_retries;
            config.retry.unbounded = false;
        }
        config.combined |= self.combined;
        config.debug |= self.debug;
        config.download_images |= self.download_images;
        config.retry.unbounded |= self.retry_forever;
    }
}

fn parse_delay(raw: &str) -> Result<Duration, String> {
    let secs: f64 = raw.parse().map_err(|_| format!("{raw:?} is not a number of seconds"))?;
    Duration::try_from_secs_f64(secs).map_err(|_| format!("{raw:?} must be a non-negative number of seconds"))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let mut config = AppConfig::load()?;
    cli.apply(&mut config);
    config.validate()?;

    Ok(run::run(&cli.years, &config).await?.exit_code())
}
