//! Representative image selection

use super::tree::PageTree;
use super::ExtractError;
use std::collections::HashMap;

/// Number of images kept when no limit is configured
pub const DEFAULT_IMAGE_LIMIT: usize = 2;

/// An `<img>` considered for ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

impl ImageCandidate {
    fn from_attrs(attrs: &HashMap<String, String>) -> Self {
        Self {
            src: attrs.get("src").cloned().unwrap_or_default(),
            width: parse_dimension(attrs.get("width")),
            height: parse_dimension(attrs.get("height")),
        }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    fn is_usable(&self) -> bool {
        !self.src.trim().is_empty() && self.width > 0 && self.height > 0
    }
}

/// Leading decimal digits of an HTML dimension ("640", "640px"), saturating
/// at `u32::MAX`; 0 when there are none
fn parse_dimension(value: Option<&String>) -> u32 {
    value.map_or(0, |v| {
        v.trim()
            .chars()
            .map_while(|c| c.to_digit(10))
            .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(d))
    })
}

/// Sources of the `limit` largest sized images, largest first.
///
/// Images without a source or without positive width and height are
/// ignored, which drops icons and tracking pixels declared as 1x1 as well
/// as anything with unknown dimensions. Equal areas keep document order.
pub fn extract_images<T: PageTree + ?Sized>(
    tree: &T,
    limit: usize,
) -> Result<Vec<String>, ExtractError> {
    let mut candidates: Vec<ImageCandidate> = tree
        .attributes_of("img")?
        .iter()
        .map(ImageCandidate::from_attrs)
        .filter(ImageCandidate::is_usable)
        .collect();

    candidates.sort_by(|a, b| b.area().cmp(&a.area()));

    Ok(candidates
        .into_iter()
        .take(limit)
        .map(|image| image.src)
        .collect())
}
