//! newsagent-rs: search and scrape core of a news summarization agent
//!
//! Resolves a query to candidate links through a search provider, then
//! fetches and extracts every link concurrently under strict time budgets.
//! Failures degrade individual results instead of failing the batch.

pub mod cache;
pub mod config;
pub mod extract;
pub mod logging;
pub mod network;
pub mod providers;
pub mod scrape;
pub mod text;

pub use cache::normalize_cache_key;
pub use config::Settings;
pub use extract::{extract_images, extract_main_content, extract_metadata, MetaData};
pub use logging::init_logging;
pub use network::HttpClient;
pub use providers::{
    select_provider, FollowUpQuestion, ProviderError, SearchGateway, SearchProviderKind,
    SearchResult,
};
pub use scrape::{ScrapedPage, Scraper};

use std::sync::Arc;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a gateway and a scraper sharing one HTTP client
pub fn build(settings: &Settings) -> anyhow::Result<(SearchGateway, Scraper)> {
    let client = HttpClient::with_settings(&settings.outgoing)?;
    let registry = providers::ProviderLoader::load(settings);
    let gateway = SearchGateway::new(client.clone(), Arc::new(registry));
    let scraper = Scraper::new(Arc::new(client), settings.scrape.clone());
    Ok((gateway, scraper))
}
