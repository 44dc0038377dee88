//! Per-link scrape tasks with a two-tier time budget

use super::models::ScrapedPage;
use crate::config::ScrapeSettings;
use crate::extract::{extract_page, ExtractError};
use crate::network::{FetchError, PageFetcher};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Why a page came back degraded
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("unexpected HTTP status {status}")]
    FetchStatus { status: u16 },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractError),
    #[error("extraction task failed: {0}")]
    Join(#[from] JoinError),
}

/// Fetches and extracts pages.
///
/// Each page gets an inner fetch timeout and an outer deadline. A page
/// that fails inside the deadline is returned degraded; a page that
/// misses the deadline is dropped (`None`) and its request aborted.
#[derive(Clone)]
pub struct Scraper {
    fetcher: Arc<dyn PageFetcher>,
    settings: ScrapeSettings,
}

impl Scraper {
    pub fn new(fetcher: Arc<dyn PageFetcher>, settings: ScrapeSettings) -> Self {
        Self { fetcher, settings }
    }

    /// Scrape one link within the outer deadline
    pub async fn scrape_one(&self, link: &str, index: usize) -> Option<ScrapedPage> {
        self.scrape_one_with_cancel(link, index, &CancellationToken::new())
            .await
    }

    /// Like [`Scraper::scrape_one`], also giving up when `cancel` fires
    pub async fn scrape_one_with_cancel(
        &self,
        link: &str,
        index: usize,
        cancel: &CancellationToken,
    ) -> Option<ScrapedPage> {
        debug!(index, "Start scraping {}", link);
        let start = Instant::now();

        tokio::select! {
            page = self.scrape_page(link) => {
                info!(
                    index,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    degraded = page.is_degraded(),
                    "Scrape completed for {}",
                    link
                );
                Some(page)
            }
            _ = tokio::time::sleep(self.settings.deadline()) => {
                warn!(index, "Execution timed out for {}", link);
                None
            }
            _ = cancel.cancelled() => {
                warn!(index, "Scrape cancelled for {}", link);
                None
            }
        }
    }

    /// Scrape all links concurrently; results line up with `links`
    pub async fn scrape_all<S: AsRef<str>>(&self, links: &[S]) -> Vec<Option<ScrapedPage>> {
        self.scrape_all_with_cancel(links, &CancellationToken::new())
            .await
    }

    pub async fn scrape_all_with_cancel<S: AsRef<str>>(
        &self,
        links: &[S],
        cancel: &CancellationToken,
    ) -> Vec<Option<ScrapedPage>> {
        let futures = links
            .iter()
            .enumerate()
            .map(|(index, link)| self.scrape_one_with_cancel(link.as_ref(), index, cancel));

        join_all(futures).await
    }

    /// Fetch and extract, degrading every failure to a URL-only page
    async fn scrape_page(&self, link: &str) -> ScrapedPage {
        match self.fetch_and_extract(link).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Error processing {}: {}", link, e);
                ScrapedPage::degraded(link)
            }
        }
    }

    async fn fetch_and_extract(&self, link: &str) -> Result<ScrapedPage, ScrapeError> {
        let fetched = self
            .fetcher
            .fetch_with_timeout(link, self.settings.fetch_timeout())
            .await?;

        if !fetched.is_success() {
            return Err(ScrapeError::FetchStatus {
                status: fetched.status,
            });
        }

        // Parse off the runtime so the deadline branch stays live.
        let max_text_chars = self.settings.max_text_chars;
        let image_limit = self.settings.image_limit;
        let extracted = tokio::task::spawn_blocking(move || {
            extract_page(&fetched.body, max_text_chars, image_limit)
        })
        .await??;

        Ok(ScrapedPage::extracted(link, extracted))
    }
}
