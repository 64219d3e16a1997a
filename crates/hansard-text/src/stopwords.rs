//! Stopword filtering for transcript tokens.
//!
//! The default set is intentionally tiny: it removes the handful of function words
//! that would otherwise dominate term counts in parliamentary transcripts, and nothing
//! else. It is embedded in the crate rather than read from configuration files, but
//! [`Stopwords::from_words`] allows callers (and tests) to substitute their own set.

use std::collections::HashSet;

/// Built-in English stopwords.
pub static DEFAULT_STOPWORDS: &[&str] = &[
    "the", "and", "to", "of", "in", "a", "is", "for", "on", "that", "with", "as", "are", "be",
    "this", "it", "by", "or", "from", "at", "an", "was", "we", "i",
];

/// A case-insensitive stopword filter.
///
/// Words are stored in lowercase; lookups lowercase the probe first.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lowercased stopwords.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates a filter containing [`DEFAULT_STOPWORDS`].
    pub fn new() -> Self {
        Self::from_words(DEFAULT_STOPWORDS.iter().copied())
    }

    /// Creates a filter from an arbitrary word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Creates a filter that matches nothing.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Checks if a term is a stopword.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(&term.to_lowercase())
    }

    /// Returns the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
