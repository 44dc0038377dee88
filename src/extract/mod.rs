//! Content extraction
//!
//! Turns fetched HTML into metadata, cleaned main text and a ranked image
//! list. The extractors only talk to a [`PageTree`], so they can run
//! against any document representation.

mod content;
mod images;
mod metadata;
mod tree;

pub use content::{extract_main_content, NOISE_TAGS};
pub use images::{extract_images, ImageCandidate, DEFAULT_IMAGE_LIMIT};
pub use metadata::{extract_metadata, MetaData};
pub use tree::{HtmlTree, PageTree};

use crate::text::{clean_source_text, truncate_chars};
use thiserror::Error;

/// Errors raised while querying a page tree
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
    #[error("document has no `{0}` element")]
    MissingRoot(String),
}

/// Everything pulled out of one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Cleaned main text, at most `max_text_chars` characters
    pub text: String,
    pub meta_data: MetaData,
    pub images: Vec<String>,
}

/// Run the full extraction over a parsed tree
pub fn extract_from_tree<T: PageTree + ?Sized>(
    tree: &T,
    max_text_chars: usize,
    image_limit: usize,
) -> Result<ExtractedPage, ExtractError> {
    let meta_data = extract_metadata(tree)?;
    let main = extract_main_content(tree)?;
    let cleaned = clean_source_text(&main);
    let images = extract_images(tree, image_limit)?;

    Ok(ExtractedPage {
        text: truncate_chars(&cleaned, max_text_chars).to_string(),
        meta_data,
        images,
    })
}

/// Parse `html` and run the full extraction
pub fn extract_page(
    html: &str,
    max_text_chars: usize,
    image_limit: usize,
) -> Result<ExtractedPage, ExtractError> {
    let tree = HtmlTree::parse(html);
    extract_from_tree(&tree, max_text_chars, image_limit)
}
