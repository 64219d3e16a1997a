//! Word tokenization over cleaned text.

use crate::{Stopwords, clean_text};

/// Minimum token length in characters; shorter tokens are dropped.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

/// Splits text into filtered word tokens.
///
/// Text is passed through [`clean_text`] first, so tokens only ever contain
/// `[a-z0-9]`. A token survives if it is at least `min_length` characters long
/// and is not a stopword. Output preserves order of appearance, duplicates included.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Words removed from the output.
    stopwords: Stopwords,
    /// Shortest token kept.
    min_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Creates a tokenizer with the default stopwords and minimum length.
    pub fn new() -> Self {
        Self {
            stopwords: Stopwords::new(),
            min_length: DEFAULT_MIN_TOKEN_LENGTH,
        }
    }

    /// Creates a tokenizer with custom settings.
    pub fn with_settings(stopwords: Stopwords, min_length: usize) -> Self {
        Self {
            stopwords,
            min_length,
        }
    }

    /// Returns the stopword set in use.
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Returns the minimum token length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Tokenizes `text`. Missing text produces no tokens.
    pub fn tokenize<'a>(&self, text: impl Into<Option<&'a str>>) -> Vec<String> {
        clean_text(text)
            .split(' ')
            .filter(|word| self.keep(word))
            .map(str::to_string)
            .collect()
    }

    /// Checks whether a cleaned word should be emitted.
    fn keep(&self, word: &str) -> bool {
        !word.is_empty() && word.len() >= self.min_length && !self.stopwords.contains(word)
    }
}
