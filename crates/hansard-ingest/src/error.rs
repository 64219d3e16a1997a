//! Error types for transcript ingestion.

use std::{io, path::PathBuf};

use hansard_config::ConfigError;
use thiserror::Error;

/// Errors raised by a [`MarkupParser`](crate::MarkupParser) when no text can be recovered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The input contains no element at all (empty file, plain text).
    #[error("no root element found")]
    NoRootElement,

    /// The input is malformed before any element could be read.
    #[error("malformed XML: {message}")]
    Malformed {
        /// Parser diagnostic.
        message: String,
    },
}

/// Errors that can occur while ingesting a directory of transcripts.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The metadata tables could not be compiled.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The input directory could not be listed.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },

    /// A source file could not be read.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A source file exceeds the per-file size guard.
    #[error("file {path} is {size} bytes, exceeding the {limit} byte limit")]
    FileTooLarge {
        /// Path to the oversized file.
        path: PathBuf,
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// No text could be extracted from a source file.
    #[error("failed to extract text from {path}: {source}")]
    Extract {
        /// Path to the unparseable file.
        path: PathBuf,
        /// Underlying extraction error.
        source: ExtractError,
    },

    /// The output directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The CSV output could not be written.
    #[error("failed to write CSV {path}: {source}")]
    WriteCsv {
        /// Output path.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },
}
