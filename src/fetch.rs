//! Narrow transport seam
//!
//! The core never talks to the network itself. Session handling, cookies,
//! decompression and retry policy all belong to the implementor of
//! [`TextFetcher`]; a failed fetch reaches the core as one opaque
//! upstream error.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("upstream fetch failed: {message}")]
    Upstream { message: String },
}

impl FetchError {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }
}

/// Fetches the raw text behind a relative resource path.
#[async_trait]
pub trait TextFetcher: Send + Sync {
    async fn fetch_text(&self, relative_path: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<T: TextFetcher + ?Sized> TextFetcher for std::sync::Arc<T> {
    async fn fetch_text(&self, relative_path: &str) -> Result<String, FetchError> {
        (**self).fetch_text(relative_path).await
    }
}
