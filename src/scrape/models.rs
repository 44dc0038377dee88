//! Scraped page model

use crate::extract::{ExtractedPage, MetaData};
use serde::{Deserialize, Serialize};

/// Content scraped from one link.
///
/// `url` is always the link that was requested, so pages can be matched
/// back to their links even when nothing else was recovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedPage {
    pub url: String,
    /// Cleaned main text; absent when the fetch or extraction failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
    /// Largest images on the page, largest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl ScrapedPage {
    /// A page that carries only its URL
    pub fn degraded(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: None,
            meta_data: None,
            images: vec![],
        }
    }

    /// A fully extracted page
    pub fn extracted(url: impl Into<String>, page: ExtractedPage) -> Self {
        Self {
            url: url.into(),
            text: Some(page.text),
            meta_data: Some(page.meta_data),
            images: page.images,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.text.is_none() && self.meta_data.is_none()
    }
}
