//! Analysis over ingested transcript records.
//!
//! A [`RecordTable`] is loaded from CSV (or built from records in memory), passed
//! through [`enrich`] to normalize metadata and derive length columns, and then
//! summarized with [`top_terms`] and [`chamber_summary`].

#![warn(missing_docs)]

mod aggregate;
mod enrich;
mod error;
mod table;

pub use aggregate::{ChamberSummary, TermCount, UNKNOWN_CHAMBER, chamber_summary, top_terms};
pub use enrich::{EnrichReport, enrich, is_canonical_date};
pub use error::AnalysisError;
pub use table::{Column, RecordTable, TableRow};
