//! Gallery image download.
//!
//! Images land at `{root}/{year}/{stem}.jpg`, where the stem comes from
//! [`cardscout_core::record::image_file_stem`]. A failed download is reported to
//! the caller, which logs it and keeps the record.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;

/// Errors from downloading or storing one image.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Non-success HTTP status.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Could not write the image file.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ImageError {
    fn from(err: reqwest::Error) -> Self {
        ImageError::Network(Arc::new(err))
    }
}

/// Writes gallery images below a root directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    http: reqwest::Client,
    root: PathBuf,
}

impl ImageStore {
    pub fn new(http: reqwest::Client, root: impl Into<PathBuf>) -> Self {
        Self { http, root: root.into() }
    }

    /// Destination for an image of `year` with file stem `stem`.
    pub fn path_for(&self, year: i32, stem: &str) -> PathBuf {
        self.root.join(year.to_string()).join(format!("{stem}.jpg"))
    }

    /// Download `url` and write it to `dest`, creating parent directories.
    pub async fn download(&self, url: &str, dest: &Path) -> Result<(), ImageError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::HttpError { status: status.as_u16() });
        }

        let bytes = response.bytes().await?;
        self.write(dest, &bytes).await?;

        tracing::debug!(path = %dest.display(), bytes = bytes.len(), "saved image");
        Ok(())
    }

    async fn write(&self, dest: &Path, bytes: &Bytes) -> Result<(), ImageError> {
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(dest, bytes).await?;
        Ok(())
    }
}
