//! Page fetching contract used by the scraper

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Raw page returned by a fetch
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: u16,
    /// Final URL after redirects
    pub url: String,
    /// Response body
    pub body: String,
}

impl FetchedPage {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors a fetch can end with; these are never degraded here
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),
    #[error("fetch failed: {0}")]
    Network(#[source] reqwest::Error),
}

/// Anything that can GET a page within a time limit
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_with_timeout(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<FetchedPage, FetchError>;
}
