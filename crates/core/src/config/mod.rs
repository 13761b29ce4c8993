//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (CARDSCOUT_*)
//! 2. TOML config file (if CARDSCOUT_CONFIG_FILE set)
//! 3. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Environment variable consulted for the credential when `CARDSCOUT_APP_ID` is unset.
pub const LEGACY_APP_ID_VAR: &str = "EBAY_APP_ID";

/// Default Finding API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://svcs.ebay.com/services/search/FindingService/v1";

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (CARDSCOUT_*)
/// 2. TOML config file (if CARDSCOUT_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// eBay application ID sent as SECURITY-APPNAME.
    ///
    /// Set via CARDSCOUT_APP_ID, or EBAY_APP_ID as a fallback.
    /// Required before any request is made.
    #[serde(default)]
    pub app_id: Option<String>,

    /// Finding API endpoint.
    ///
    /// Set via CARDSCOUT_ENDPOINT environment variable.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in milliseconds.
    ///
    /// Set via CARDSCOUT_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum pages fetched per year (0 = until results run out).
    #[serde(default)]
    pub max_pages: u32,

    /// Pause between successful page requests, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Destination directory for CSV files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Write `cards_all.csv` with every row scraped.
    #[serde(default)]
    pub combined: bool,

    /// Download gallery images under `image_dir/<year>/`.
    #[serde(default)]
    pub download_images: bool,

    /// Root directory for downloaded images.
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,

    /// Log raw API responses.
    #[serde(default)]
    pub debug: bool,

    /// Retry policy for failed page fetches.
    ///
    /// Nested keys use a double underscore, e.g. CARDSCOUT_RETRY__MAX_RETRIES.
    #[serde(default)]
    pub retry: RetrySettings,
}

/// Retry settings for transient fetch failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Retries after the first failed attempt of a page.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before the first retry.
    #[serde(default = "default_retry_base_ms")]
    pub base_delay_ms: u64,

    /// Upper bound for any single retry delay.
    #[serde(default = "default_retry_max_ms")]
    pub max_delay_ms: u64,

    /// Multiplier applied per additional failure.
    #[serde(default = "default_retry_factor")]
    pub factor: f64,

    /// Retry forever at a fixed `base_delay_ms` interval.
    #[serde(default)]
    pub unbounded: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_delay_ms() -> u64 {
    1_000
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_image_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_max_retries() -> u32 {
    5
}

fn default_retry_base_ms() -> u64 {
    5_000
}

fn default_retry_max_ms() -> u64 {
    60_000
}

fn default_retry_factor() -> f64 {
    2.0
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            base_delay_ms: default_retry_base_ms(),
            max_delay_ms: default_retry_max_ms(),
            factor: default_retry_factor(),
            unbounded: false,
        }
    }
}

impl RetrySettings {
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            max_pages: 0,
            delay_ms: default_delay_ms(),
            output_dir: default_output_dir(),
            combined: false,
            download_images: false,
            image_dir: default_image_dir(),
            debug: false,
            retry: RetrySettings::default(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Inter-page delay as Duration.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `CARDSCOUT_`
    /// 2. TOML file from `CARDSCOUT_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// If no app id was found, `EBAY_APP_ID` is consulted. The result is not
    /// validated; callers apply flag overrides first and then call
    /// [`AppConfig::validate`] once.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadFailed` if the configuration file cannot be
    /// read or environment variables cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("CARDSCOUT_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("CARDSCOUT_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let mut config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        if config.app_id.as_deref().is_none_or(str::is_empty) {
            config.app_id = std::env::var(LEGACY_APP_ID_VAR).ok().filter(|id| !id.is_empty());
        }

        Ok(config)
    }

    /// Return the application id, failing before any network activity if unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the app id is absent or empty.
    pub fn require_app_id(&self) -> Result<&str, ConfigError> {
        self.app_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "app_id".into(),
                hint: "Set EBAY_APP_ID (or CARDSCOUT_APP_ID) environment variable".into(),
            })
    }
}
