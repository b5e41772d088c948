//! Result deduplication
//!
//! Two hits are duplicates when they share a normalized URL *or* a title
//! fingerprint. The title rule is deliberately coarse: distinct postings
//! whose titles agree on the first 50 characters collapse into one, and so
//! do all hits with an empty title.
//!
//! ```ignore
//! let unique = xray::dedup::dedupe(items);
//! ```

use std::collections::HashSet;

use crate::search::ResultItem;

/// Characters of the title that contribute to its fingerprint.
pub const TITLE_FINGERPRINT_CHARS: usize = 50;

/// Identity of a result for duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub url: String,
    pub title: String,
}

impl DedupKey {
    pub fn of(item: &ResultItem) -> Self {
        Self {
            url: normalize_url(&item.link),
            title: title_fingerprint(&item.title),
        }
    }
}

/// Link without its query string and trailing slashes.
pub fn normalize_url(link: &str) -> String {
    let base = link.split_once('?').map_or(link, |(base, _)| base);
    base.trim_end_matches('/').to_string()
}

/// First 50 characters of the trimmed, lowercased title, whitespace removed.
pub fn title_fingerprint(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .chars()
        .take(TITLE_FINGERPRINT_CHARS)
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

/// Drop repeats, keeping the first occurrence and the original order.
pub fn dedupe(items: Vec<ResultItem>) -> Vec<ResultItem> {
    let mut seen_urls = HashSet::new();
    let mut seen_titles = HashSet::new();

    items
        .into_iter()
        .filter(|item| {
            let key = DedupKey::of(item);
            if seen_urls.contains(&key.url) || seen_titles.contains(&key.title) {
                return false;
            }
            seen_urls.insert(key.url);
            seen_titles.insert(key.title);
            true
        })
        .collect()
}
