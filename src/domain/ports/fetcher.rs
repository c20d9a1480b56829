//! Network access to the reference dataset.

use async_trait::async_trait;

/// Errors raised while downloading the reference dataset.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Downloads raw dataset text from a URL.
///
/// Timeouts and retries are the implementation's concern; callers make one
/// call per refresh.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatasetFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
