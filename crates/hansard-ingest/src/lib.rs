//! Transcript XML ingestion.
//!
//! Turns a directory of transcript XML files into [`DocumentRecord`]s:
//!
//! 1. [`discover_xml_files`] lists `*.xml` files in lexical order
//! 2. [`RecordBuilder`] infers metadata from each file name and extracts its text
//! 3. [`Ingester`] runs the builder over every file, isolating per-file failures
//! 4. [`write_records_csv`] persists the records as a CSV table
//!
//! Text extraction goes through the [`MarkupParser`] capability so that the recovery
//! policy for malformed markup can be swapped independently of the rest of the pipeline.

#![warn(missing_docs)]

mod discovery;
mod error;
mod extract;
mod ingest;
mod metadata;
mod record;
mod write;

pub use discovery::discover_xml_files;
pub use error::{ExtractError, IngestError};
pub use extract::{
    Extraction, MarkupParser, RecoveringXmlParser, TRUNCATION_MARKER, TextExtractor,
    normalize_whitespace, truncate_with_marker,
};
pub use ingest::{
    FailurePolicy, IngestOutcome, IngestReporter, IngestStats, Ingester, SilentReporter,
};
pub use metadata::{FileMetadata, infer_chamber, infer_date, infer_metadata};
pub use record::{BuiltRecord, DocumentRecord, PROCESSING_VERSION, RECORD_COLUMNS, RecordBuilder};
pub use write::write_records_csv;
