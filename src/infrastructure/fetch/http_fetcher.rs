//! `reqwest`-based dataset fetcher with bounded retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};
use tokio_retry::{
    RetryIf,
    strategy::{ExponentialBackoff, jitter},
};
use tracing::{debug, warn};

use crate::domain::ports::{DatasetFetcher, FetchError};

const RETRY_BASE: u64 = 2;
const RETRY_FACTOR_MS: u64 = 100;
const RETRY_MAX_DELAY: Duration = Duration::from_secs(5);

/// Knobs for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Extra attempts after the first failure.
    pub retries: usize,
    /// Sent as the `apikey` header when present.
    pub api_key: Option<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            retries: 2,
            api_key: None,
        }
    }
}

/// Downloads dataset text over HTTP(S).
///
/// Transport errors and 5xx/429 responses are retried with jittered
/// exponential backoff; other non-success statuses fail immediately.
pub struct HttpFetcher {
    client: Client,
    retries: usize,
}

impl HttpFetcher {
    /// Builds the underlying HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not a valid header value or the
    /// TLS backend cannot be initialized.
    pub fn new(settings: FetchSettings) -> anyhow::Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(key) = settings.api_key.as_deref() {
            let mut value = header::HeaderValue::from_str(key)?;
            value.set_sensitive(true);
            headers.insert("apikey", value);
        }

        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            retries: settings.retries,
        })
    }

    async fn fetch_once(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::Request {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

fn is_retriable(error: &FetchError) -> bool {
    match error {
        FetchError::Request { .. } => true,
        FetchError::Status { status, .. } => *status == 429 || *status >= 500,
    }
}

#[async_trait]
impl DatasetFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        // 200ms, 400ms, 800ms, ... before jitter
        let strategy = ExponentialBackoff::from_millis(RETRY_BASE)
            .factor(RETRY_FACTOR_MS)
            .max_delay(RETRY_MAX_DELAY)
            .map(jitter)
            .take(self.retries);

        let result = RetryIf::spawn(
            strategy,
            move || async move {
                let attempt = self.fetch_once(url).await;
                if let Err(e) = &attempt {
                    warn!("Dataset fetch attempt failed: {}", e);
                }
                attempt
            },
            is_retriable,
        )
        .await;

        if let Ok(body) = &result {
            debug!("Fetched {} bytes from {}", body.len(), url);
        }
        result
    }
}
