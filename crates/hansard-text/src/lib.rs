//! Text cleaning and tokenization for transcript analysis.
//!
//! The pipeline is deliberately small and transparent:
//!
//! 1. [`clean_text`] case-folds, strips URLs and punctuation, and collapses whitespace
//! 2. [`Tokenizer`] splits cleaned text and drops short words and [`Stopwords`]
//!
//! Tokens keep their order of appearance and duplicates are retained, so the output
//! can be fed directly into frequency counting.

#![warn(missing_docs)]

mod clean;
mod stopwords;
mod tokenize;

pub use clean::clean_text;
pub use stopwords::{DEFAULT_STOPWORDS, Stopwords};
pub use tokenize::{DEFAULT_MIN_TOKEN_LENGTH, Tokenizer};
