//! Core types and shared functionality for cardscout.
//!
//! This crate provides:
//! - Query construction and year-spec parsing
//! - Heuristic listing-title parsing (player, grade, card number)
//! - Record assembly and per-year/combined aggregation
//! - Layered configuration and CSV output

pub mod aggregate;
pub mod config;
pub mod error;
pub mod output;
pub mod query;
pub mod record;
pub mod title;
pub mod years;

pub use aggregate::{CombinedResultSet, YearResultSet};
pub use config::{AppConfig, ConfigError, RetrySettings};
pub use error::Error;
pub use query::Query;
pub use record::{NormalizedRecord, RawItem};
pub use title::{ExtractedAttributes, TitleParser, TitlePatterns};
pub use years::parse_years;
