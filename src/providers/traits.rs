//! Search provider traits and types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Every search backend the agent knows how to name.
///
/// Only some variants have an implementation; the rest resolve to
/// [`ProviderError::Unsupported`] at the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchProviderKind {
    /// Serper.dev, POST with a JSON body
    SerperDev,
    Bing,
    /// Google Custom Search, GET with query parameters
    GoogleApi,
    BingApi,
    Brave,
}

impl SearchProviderKind {
    pub const ALL: [SearchProviderKind; 5] = [
        Self::SerperDev,
        Self::Bing,
        Self::GoogleApi,
        Self::BingApi,
        Self::Brave,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SerperDev => "SERPER_DEV",
            Self::Bing => "BING",
            Self::GoogleApi => "GOOGLE_API",
            Self::BingApi => "BING_API",
            Self::Brave => "BRAVE",
        }
    }
}

impl fmt::Display for SearchProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchProviderKind {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProviderError::UnknownTag(s.to_string()))
    }
}

/// A follow-up question suggested by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    /// Source link; empty for related-search suggestions
    pub link: String,
    pub question: String,
}

impl FollowUpQuestion {
    pub fn new(link: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            question: question.into(),
        }
    }
}

/// Links resolved for a query, plus optional follow-up questions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub links: Vec<String>,
    #[serde(default)]
    pub follow_up_questions: Vec<FollowUpQuestion>,
}

impl SearchResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_links(links: Vec<String>) -> Self {
        Self {
            links,
            follow_up_questions: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.follow_up_questions.is_empty()
    }
}

/// Parameters for building a provider request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Search query string
    pub query: String,
    /// Caller-supplied query category (e.g. "news")
    pub query_type: String,
    /// Region hint, sent lower-cased
    pub location: String,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            query_type: String::new(),
            location: String::new(),
        }
    }

    pub fn with_query_type(mut self, query_type: impl Into<String>) -> Self {
        self.query_type = query_type.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Region hint as providers expect it
    pub fn region(&self) -> String {
        self.location.to_lowercase()
    }
}

/// HTTP request to be made for a provider
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// URL to request
    pub url: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Query parameters, encoded by the HTTP layer
    pub params: Vec<(String, String)>,
    /// JSON body for POST requests
    pub json: Option<serde_json::Value>,
}

impl ProviderRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self::with_method(url, HttpMethod::Get)
    }

    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self::with_method(url, HttpMethod::Post)
    }

    fn with_method(url: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            url: url.into(),
            method,
            headers: HashMap::new(),
            params: Vec::new(),
            json: None,
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Add JSON body
    pub fn json(mut self, data: serde_json::Value) -> Self {
        self.json = Some(data);
        self
    }

    /// Value of a query parameter, if set
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// HTTP response from a provider request
#[derive(Debug)]
pub struct ProviderResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl ProviderResponse {
    pub fn new(status: u16, text: impl Into<String>) -> Self {
        Self {
            status,
            text: text.into(),
        }
    }

    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ProviderError> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors raised while talking to a search provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unsupported search provider: {0}")]
    Unsupported(SearchProviderKind),
    #[error("unknown search provider tag: {0}")]
    UnknownTag(String),
    #[error("missing credential {0}")]
    MissingCredentials(&'static str),
    #[error("provider request failed: {0}")]
    Network(reqwest::Error),
    #[error("provider returned HTTP {0}")]
    Status(u16),
    #[error("unexpected provider response: {0}")]
    Shape(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ProviderError {
    /// Drops the request URL, which carries API keys as query params
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.without_url())
    }
}

impl ProviderError {
    /// Errors that indicate a configuration defect rather than a bad call
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Unsupported(_) | Self::UnknownTag(_))
    }
}

/// A search backend turning a query into links.
///
/// Implementations only build requests and parse responses; the HTTP
/// round trip belongs to the gateway.
pub trait SearchProvider: Send + Sync {
    /// Which provider this is
    fn kind(&self) -> SearchProviderKind;

    /// Engine name used in logs
    fn name(&self) -> &str {
        self.kind().as_str()
    }

    /// Build the HTTP request for a search
    fn request(&self, params: &SearchParams) -> Result<ProviderRequest, ProviderError>;

    /// Parse the HTTP response into results
    fn response(&self, response: ProviderResponse) -> Result<SearchResult, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_strings() {
        assert_eq!(
            "serper_dev".parse::<SearchProviderKind>().unwrap(),
            SearchProviderKind::SerperDev
        );
        assert_eq!(SearchProviderKind::GoogleApi.to_string(), "GOOGLE_API");
        assert!(matches!(
            "YAHOO".parse::<SearchProviderKind>(),
            Err(ProviderError::UnknownTag(_))
        ));
    }

    #[test]
    fn test_kind_serde_uses_tags() {
        let json = serde_json::to_string(&SearchProviderKind::BingApi).unwrap();
        assert_eq!(json, "\"BING_API\"");
    }

    #[test]
    fn test_search_params_region_is_lowercase() {
        let params = SearchParams::new("q").with_location("US");
        assert_eq!(params.region(), "us");
    }

    #[test]
    fn test_fatal_errors() {
        assert!(ProviderError::Unsupported(SearchProviderKind::Brave).is_fatal());
        assert!(!ProviderError::Status(500).is_fatal());
    }
}
