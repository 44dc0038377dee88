//! Cache key derivation
//!
//! The agent caches provider and scrape results outside this crate; this
//! module only derives the short keys it stores them under.

use crate::text::{clean_url_for_user_view, truncate_chars};

/// Characters of the query kept in a cache key
pub const CACHE_KEY_MAX_CHARS: usize = 50;

/// Short, stable key for a query or URL.
///
/// Drops a leading `https://` or `http://`, keeps the first
/// [`CACHE_KEY_MAX_CHARS`] characters and cleans the result for display.
pub fn normalize_cache_key(query: &str) -> String {
    let without_scheme = query
        .strip_prefix("https://")
        .or_else(|| query.strip_prefix("http://"))
        .unwrap_or(query);

    clean_url_for_user_view(truncate_chars(without_scheme, CACHE_KEY_MAX_CHARS))
}
