//! Error types for hansard configuration.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or compiling configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// The filename date pattern is not a valid regex.
    #[error("invalid date pattern '{pattern}': {source}")]
    InvalidDatePattern {
        /// The offending pattern.
        pattern: String,
        /// Underlying regex error.
        source: regex::Error,
    },

    /// The filename date pattern does not capture year, month, and day.
    #[error("date pattern '{pattern}' must have exactly 3 capture groups, found {groups}")]
    DatePatternGroups {
        /// The offending pattern.
        pattern: String,
        /// Number of capture groups found.
        groups: usize,
    },

    /// A chamber rule has no usable keywords.
    #[error("chamber '{chamber}' has no keywords")]
    EmptyChamberKeywords {
        /// Name of the chamber rule.
        chamber: String,
    },
}
