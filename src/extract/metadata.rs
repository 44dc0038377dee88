//! Page metadata (Open Graph and friends)

use super::tree::PageTree;
use super::ExtractError;
use serde::{Deserialize, Serialize};

/// Descriptive metadata of a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Where a metadata value can come from
#[derive(Debug, Clone, Copy)]
enum Source {
    Attr(&'static str, &'static str),
    Text(&'static str),
}

const TITLE_SOURCES: &[Source] = &[
    Source::Attr(r#"meta[property="og:title"]"#, "content"),
    // Reddit renders its post title in a custom element.
    Source::Attr("shreddit-title", "title"),
    Source::Text("title"),
    Source::Attr(r#"meta[name="title"]"#, "content"),
];

const DESCRIPTION_SOURCES: &[Source] = &[
    Source::Attr(r#"meta[property="og:description"]"#, "content"),
    Source::Attr(r#"meta[name="description"]"#, "content"),
];

const SITE_NAME_SOURCES: &[Source] = &[Source::Attr(r#"meta[property="og:site_name"]"#, "content")];

const IMAGE_SOURCES: &[Source] = &[
    Source::Attr(r#"meta[name="og:image"]"#, "content"),
    Source::Attr(r#"meta[property="og:image"]"#, "content"),
    Source::Attr(r#"meta[property="twitter:image"]"#, "content"),
    Source::Attr(r#"meta[name="twitter:image"]"#, "content"),
];

/// First non-blank value among `sources`, trimmed
fn first_present<T: PageTree + ?Sized>(
    tree: &T,
    sources: &[Source],
) -> Result<Option<String>, ExtractError> {
    for source in sources {
        let value = match *source {
            Source::Attr(selector, attr) => tree.first_attr(selector, attr)?,
            Source::Text(selector) => Some(tree.text_of(selector)?),
        };

        if let Some(value) = value {
            let value = value.trim();
            if !value.is_empty() {
                return Ok(Some(value.to_string()));
            }
        }
    }
    Ok(None)
}

/// Extract title, description, site name and lead image
pub fn extract_metadata<T: PageTree + ?Sized>(tree: &T) -> Result<MetaData, ExtractError> {
    Ok(MetaData {
        title: first_present(tree, TITLE_SOURCES)?,
        description: first_present(tree, DESCRIPTION_SOURCES)?,
        site_name: first_present(tree, SITE_NAME_SOURCES)?,
        image: first_present(tree, IMAGE_SOURCES)?,
    })
}
