//! Document records and the per-file record builder.

use std::{fs, path::Path};

use hansard_config::{CompiledMetadataRules, Config, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    IngestError, MarkupParser, RecoveringXmlParser, TextExtractor,
    metadata::{FileMetadata, infer_metadata},
};

/// Version tag stamped on every record.
pub const PROCESSING_VERSION: &str = "v1.0";

/// Column names in [`DocumentRecord`] field order.
pub const RECORD_COLUMNS: [&str; 7] = [
    "doc_id",
    "date",
    "chamber",
    "source_file",
    "text",
    "text_length",
    "processing_version",
];

/// One ingested transcript.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// File stem of the source file.
    pub doc_id: String,
    /// Sitting date inferred from the file name.
    pub date: Option<String>,
    /// Chamber inferred from the file name.
    pub chamber: Option<String>,
    /// Original file name.
    pub source_file: String,
    /// Extracted, length-bounded text.
    pub text: String,
    /// Character count of `text` at creation.
    pub text_length: usize,
    /// Pipeline version tag.
    pub processing_version: String,
}

impl DocumentRecord {
    /// Creates a record, computing the text length and stamping the version.
    pub fn new(
        doc_id: impl Into<String>,
        metadata: FileMetadata,
        source_file: impl Into<String>,
        text: String,
    ) -> Self {
        Self {
            doc_id: doc_id.into(),
            date: metadata.date,
            chamber: metadata.chamber,
            source_file: source_file.into(),
            text_length: text.chars().count(),
            text,
            processing_version: PROCESSING_VERSION.to_string(),
        }
    }
}

/// A record together with the syntax error its extraction recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRecord {
    /// The record.
    pub record: DocumentRecord,
    /// Set when the file's markup broke off and only the text before the error was kept.
    pub recovered_error: Option<String>,
}

/// Builds a [`DocumentRecord`] from a single source file.
#[derive(Debug, Clone)]
pub struct RecordBuilder<P = RecoveringXmlParser> {
    /// Compiled date and chamber rules.
    rules: CompiledMetadataRules,
    /// Text extractor with its character budget.
    extractor: TextExtractor<P>,
    /// Files larger than this are rejected unread.
    max_file_bytes: u64,
}

impl RecordBuilder {
    /// Creates a builder from configuration.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::with_parts(
            config.compile_metadata_rules()?,
            TextExtractor::new(config.ingest.max_chars),
            config.ingest.max_file_bytes,
        ))
    }
}

impl<P: MarkupParser> RecordBuilder<P> {
    /// Creates a builder from already compiled parts.
    pub fn with_parts(
        rules: CompiledMetadataRules,
        extractor: TextExtractor<P>,
        max_file_bytes: u64,
    ) -> Self {
        Self {
            rules,
            extractor,
            max_file_bytes,
        }
    }

    /// Reads `path` and builds its record.
    ///
    /// Metadata misses are not errors; only reading and extraction failures are. A
    /// partial extraction still yields a record and is logged as a warning.
    pub fn build(&self, path: &Path) -> Result<BuiltRecord, IngestError> {
        let size = fs::metadata(path)
            .map_err(|source| IngestError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        if size > self.max_file_bytes {
            return Err(IngestError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.max_file_bytes,
            });
        }

        let bytes = fs::read(path).map_err(|source| IngestError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let extraction = self
            .extractor
            .extract(&bytes)
            .map_err(|source| IngestError::Extract {
                path: path.to_path_buf(),
                source,
            })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let doc_id = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let metadata = infer_metadata(&file_name, &self.rules);

        if let Some(error) = &extraction.recovered_error {
            warn!(
                path = %path.display(),
                %error,
                "markup broke off, keeping text read before the error"
            );
        }
        debug!(
            file = %file_name,
            chars = extraction.text.chars().count(),
            date = ?metadata.date,
            chamber = ?metadata.chamber,
            "built record"
        );

        Ok(BuiltRecord {
            record: DocumentRecord::new(doc_id, metadata, file_name, extraction.text),
            recovered_error: extraction.recovered_error,
        })
    }
}

#[cfg(test)]
mod test {
    use tempfile::TempDir;

    use super::*;
    use crate::{ExtractError, TRUNCATION_MARKER};

    fn builder() -> RecordBuilder {
        RecordBuilder::new(&Config::default()).unwrap()
    }

    #[test]
    fn builds_record_from_senate_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Senate_2025_02_10_Official.xml");
        fs::write(
            &path,
            "<hansard><p>Senator SMITH: I move that the bill be read.</p></hansard>",
        )
        .unwrap();

        let record = builder().build(&path).unwrap().record;
        assert_eq!(record.doc_id, "Senate_2025_02_10_Official");
        assert_eq!(record.date.as_deref(), Some("2025-02-10"));
        assert_eq!(record.chamber.as_deref(), Some("Senate"));
        assert_eq!(record.source_file, "Senate_2025_02_10_Official.xml");
        assert_eq!(record.text, "Senator SMITH: I move that the bill be read.");
        assert_eq!(record.text_length, record.text.chars().count());
        assert_eq!(record.processing_version, PROCESSING_VERSION);
    }

    #[test]
    fn metadata_misses_are_not_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("committee_notes.xml");
        fs::write(&path, "<a>text</a>").unwrap();

        let record = builder().build(&path).unwrap().record;
        assert_eq!(record.date, None);
        assert_eq!(record.chamber, None);
    }

    #[test]
    fn long_text_is_truncated() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("house.xml");
        fs::write(&path, format!("<a>{}</a>", "x".repeat(50))).unwrap();

        let rules = CompiledMetadataRules::compile(&Default::default()).unwrap();
        let builder = RecordBuilder::with_parts(rules, TextExtractor::new(20), 1024);
        let record = builder.build(&path).unwrap().record;

        assert_eq!(record.text_length, 20 + TRUNCATION_MARKER.len());
        assert!(record.text.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn broken_markup_builds_partial_record() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Senate_2025_02_10.xml");
        fs::write(&path, "<a><p>one</p><!x><p>two</p></a>").unwrap();

        let built = builder().build(&path).unwrap();
        assert_eq!(built.record.text, "one");
        assert!(built.recovered_error.is_some());

        fs::write(&path, "<a><p>one</p><p>two</p></a>").unwrap();
        assert_eq!(builder().build(&path).unwrap().recovered_error, None);
    }

    #[test]
    fn empty_file_fails_extraction() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.xml");
        fs::write(&path, "").unwrap();

        let err = builder().build(&path).unwrap_err();
        assert!(matches!(
            err,
            IngestError::Extract {
                source: ExtractError::NoRootElement,
                ..
            }
        ));
    }

    #[test]
    fn oversized_file_is_rejected_before_parsing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("big.xml");
        fs::write(&path, format!("<a>{}</a>", "y".repeat(100))).unwrap();

        let rules = CompiledMetadataRules::compile(&Default::default()).unwrap();
        let builder = RecordBuilder::with_parts(rules, TextExtractor::new(1_000), 16);
        let err = builder.build(&path).unwrap_err();
        assert!(matches!(err, IngestError::FileTooLarge { limit: 16, .. }));
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let err = builder().build(&temp.path().join("gone.xml")).unwrap_err();
        assert!(matches!(err, IngestError::ReadFile { .. }));
    }
}
