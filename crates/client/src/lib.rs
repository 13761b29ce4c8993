//! Client code for cardscout.
//!
//! This crate provides the Finding API client, the paginated retrieval
//! controller with retry/backoff, and gallery image download.

pub mod finding;
pub mod images;
pub mod retrieval;

pub use finding::{FindingClient, FindingConfig, FindingError, FindingRequest, PageSource};
pub use images::{ImageError, ImageStore};
pub use retrieval::{Backoff, RetrievalError, RetrievalOptions, Retriever, RetryPolicy};
