//! Candidate URL extraction from free text.
//!
//! A purely lexical scan: anything that starts with `http://` or `https://`
//! and runs over non-whitespace characters up to a word boundary is a
//! candidate. Nothing is validated here; the mapper drops what does not parse.

use std::sync::LazyLock;

use regex::Regex;

/// `http` or `https`, `://`, then non-whitespace ending at a word boundary.
/// Trailing punctuation such as `.`, `)` or `!` is left out of the match.
/// `\b` is Unicode-aware, so a path ending in `é` or `ü` keeps that letter.
static URL_SELECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+\b").expect("URL selector pattern must compile"));

/// Returns every candidate URL in `text`, left to right.
///
/// Duplicates are kept; matches never overlap.
pub fn extract_candidate_urls(text: &str) -> Vec<String> {
    URL_SELECTOR
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Cheap pre-check used before running the full scan on a message.
pub fn may_contain_urls(text: &str) -> bool {
    text.contains("http://") || text.contains("https://")
}
