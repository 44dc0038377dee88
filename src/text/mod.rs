//! Text and URL cleaning helpers
//!
//! Deterministic normalizers applied to extracted page text and to
//! strings shown to users or used as cache keys.

use once_cell::sync::Lazy;
use regex::Regex;

/// Control and zero-width characters that carry no visible text
static INVISIBLE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F\u{200B}-\u{200D}\u{2060}\u{FEFF}]")
        .expect("invalid invisible-char pattern")
});

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace pattern"));

/// Collapse every run of whitespace to a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Clean text scraped from a page
pub fn clean_source_text(text: &str) -> String {
    let visible = INVISIBLE_CHARS.replace_all(text, "");
    collapse_whitespace(&visible)
}

/// Make a URL (or URL-like query) presentable: no `www.` prefix, no trailing slashes
pub fn clean_url_for_user_view(url: &str) -> String {
    let trimmed = url.trim();
    let without_www = trimmed.strip_prefix("www.").unwrap_or(trimmed);
    without_www.trim_end_matches('/').to_string()
}

/// First `max_chars` characters of `text`, never splitting a character
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
