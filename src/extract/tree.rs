//! Narrow query API over a parsed page

use super::ExtractError;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;

/// The handful of DOM queries the extractors need.
///
/// Selectors use CSS syntax. Text is returned exactly as it appears in the
/// document; callers normalize whitespace themselves.
pub trait PageTree {
    /// Attribute `attr` of the first element matching `selector`
    fn first_attr(&self, selector: &str, attr: &str) -> Result<Option<String>, ExtractError>;

    /// Text of every element matching `selector`, concatenated
    fn text_of(&self, selector: &str) -> Result<String, ExtractError>;

    /// Attributes of every element matching `selector`, in document order
    fn attributes_of(&self, selector: &str) -> Result<Vec<HashMap<String, String>>, ExtractError>;

    /// Text below the first `root` element, skipping subtrees whose tag is in `excluded`
    fn visible_text(&self, root: &str, excluded: &[&str]) -> Result<String, ExtractError>;
}

/// [`PageTree`] backed by an html5ever document
pub struct HtmlTree {
    document: Html,
}

impl HtmlTree {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }
}

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector {
        selector: css.to_string(),
        reason: format!("{:?}", e),
    })
}

fn collect_text(element: ElementRef<'_>, excluded: &[&str], out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if !excluded.contains(&child_el.value().name()) {
                collect_text(child_el, excluded, out);
            }
        }
    }
}

impl PageTree for HtmlTree {
    fn first_attr(&self, css: &str, attr: &str) -> Result<Option<String>, ExtractError> {
        let sel = selector(css)?;
        Ok(self
            .document
            .select(&sel)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(|v| v.to_string()))
    }

    fn text_of(&self, css: &str) -> Result<String, ExtractError> {
        let sel = selector(css)?;
        Ok(self
            .document
            .select(&sel)
            .flat_map(|el| el.text())
            .collect())
    }

    fn attributes_of(&self, css: &str) -> Result<Vec<HashMap<String, String>>, ExtractError> {
        let sel = selector(css)?;
        Ok(self
            .document
            .select(&sel)
            .map(|el| {
                el.value()
                    .attrs()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .collect())
    }

    fn visible_text(&self, root: &str, excluded: &[&str]) -> Result<String, ExtractError> {
        let sel = selector(root)?;
        let root_el = self
            .document
            .select(&sel)
            .next()
            .ok_or_else(|| ExtractError::MissingRoot(root.to_string()))?;

        let mut out = String::new();
        collect_text(root_el, excluded, &mut out);
        Ok(out)
    }
}
