//! Error types for record table analysis.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a record table.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The CSV file could not be opened or parsed.
    #[error("failed to read CSV {path}: {source}")]
    ReadCsv {
        /// Path to the CSV file.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },
}
