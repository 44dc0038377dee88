//! HTTP networking module
//!
//! Provides the HTTP client used for search provider calls and page fetches.

mod client;
mod fetch;
mod user_agent;

pub use client::HttpClient;
pub use fetch::{FetchError, FetchedPage, PageFetcher};
pub use user_agent::generate_user_agent;
