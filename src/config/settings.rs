//! Settings structures for newsagent-rs configuration

use crate::providers::SearchProviderKind;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Main settings structure, loaded from `newsagent.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub providers: ProviderSettings,
    pub scrape: ScrapeSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Merge provider credentials and `NEWSAGENT_*` overrides from the environment
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    fn merge_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("YOUR_GOOGLE_API_KEY") {
            self.providers.google_api_key = Some(val);
        }
        if let Some(val) = var("GOOGLE_CX") {
            self.providers.google_cx = Some(val);
        }
        if let Some(val) = var("SERPER_DEV_KEY") {
            self.providers.serper_key = Some(val);
        }
        if let Some(ms) = var("NEWSAGENT_FETCH_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.scrape.fetch_timeout_ms = ms;
        }
        if let Some(ms) = var("NEWSAGENT_DEADLINE_MS").and_then(|v| v.parse().ok()) {
            self.scrape.deadline_ms = ms;
        }
    }
}

/// Search provider endpoints and credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Google Custom Search API key
    pub google_api_key: Option<String>,
    /// Google Custom Search engine context (`cx`)
    pub google_cx: Option<String>,
    /// Serper.dev API key
    pub serper_key: Option<String>,
    /// Google Custom Search endpoint
    pub google_api_url: String,
    /// Serper.dev search endpoint
    pub serper_url: String,
    /// Providers that must not be loaded
    pub disabled: Vec<SearchProviderKind>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            google_api_key: None,
            google_cx: None,
            serper_key: None,
            google_api_url: "https://www.googleapis.com/customsearch/v1".to_string(),
            serper_url: "https://google.serper.dev/search".to_string(),
            disabled: vec![],
        }
    }
}

impl ProviderSettings {
    /// Whether the given provider has been switched off
    pub fn is_disabled(&self, kind: SearchProviderKind) -> bool {
        self.disabled.contains(&kind)
    }
}

/// Time budgets and limits for page scraping
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeSettings {
    /// Inner timeout for a single page fetch
    pub fetch_timeout_ms: u64,
    /// Outer deadline after which a scrape task is abandoned
    pub deadline_ms: u64,
    /// Maximum number of characters kept from a page's text
    pub max_text_chars: usize,
    /// Number of images kept by the image ranker
    pub image_limit: usize,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: 1800,
            deadline_ms: 3000,
            max_text_chars: 10_000,
            image_limit: crate::extract::DEFAULT_IMAGE_LIMIT,
        }
    }
}

impl ScrapeSettings {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Timeout for search provider calls, in seconds
    pub request_timeout: f64,
    /// Text appended to the generated user agent
    pub useragent_suffix: Option<String>,
    /// Pool max size
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send with every request
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 5.0,
            useragent_suffix: None,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}
