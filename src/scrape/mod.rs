//! Scrape orchestration module
//!
//! Runs one fetch-and-extract task per link under an inner fetch timeout
//! and an outer deadline, and collects results in link order.

mod models;
mod orchestrator;

pub use models::ScrapedPage;
pub use orchestrator::{ScrapeError, Scraper};
