//! Text normalization applied before tokenization.

use once_cell::sync::Lazy;
use regex::Regex;

/// Scheme-prefixed or `www.`-prefixed runs of non-whitespace.
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("URL pattern should compile"));

/// Anything that is not a lowercase ASCII letter, digit, or whitespace.
static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("character class should compile"));

/// Runs of whitespace.
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern should compile"));

/// Normalizes raw text for tokenization.
///
/// Steps, in order:
/// - lowercase
/// - replace URL-like substrings (`http://`, `https://`, `www.`) with a space
/// - replace every character outside `[a-z0-9\s]` with a space
/// - collapse whitespace runs to a single space and trim
///
/// Missing input yields an empty string. The function never fails and is idempotent:
/// cleaning already-cleaned text returns it unchanged.
pub fn clean_text<'a>(text: impl Into<Option<&'a str>>) -> String {
    let Some(text) = text.into() else {
        return String::new();
    };

    let lowered = text.to_lowercase();
    let without_urls = URL_PATTERN.replace_all(&lowered, " ");
    let alphanumeric = NON_ALPHANUMERIC.replace_all(&without_urls, " ");
    WHITESPACE.replace_all(&alphanumeric, " ").trim().to_string()
}
