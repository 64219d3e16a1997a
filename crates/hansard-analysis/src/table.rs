//! In-memory record tables.
//!
//! A table tracks which columns are present separately from the values in each row.
//! Fallbacks in enrichment and aggregation depend on column presence, so a column
//! that exists but is empty for some rows behaves differently from a missing column.

use std::path::Path;

use csv::ReaderBuilder;
use hansard_ingest::DocumentRecord;
use hansard_text::Tokenizer;
use serde::{Deserialize, Serialize};

use crate::{AnalysisError, TermCount, top_terms};

/// A known record table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    /// Document identifier.
    DocId,
    /// Sitting date.
    Date,
    /// Chamber name.
    Chamber,
    /// Source file name.
    SourceFile,
    /// Extracted text.
    Text,
    /// Text length recorded at ingestion.
    TextLength,
    /// Pipeline version tag.
    ProcessingVersion,
    /// Character count derived during enrichment.
    NChars,
    /// Word count derived during enrichment.
    NWords,
}

impl Column {
    /// Every known column, in canonical order.
    pub const ALL: [Self; 9] = [
        Self::DocId,
        Self::Date,
        Self::Chamber,
        Self::SourceFile,
        Self::Text,
        Self::TextLength,
        Self::ProcessingVersion,
        Self::NChars,
        Self::NWords,
    ];

    /// Returns the CSV header name.
    pub fn name(self) -> &'static str {
        match self {
            Self::DocId => "doc_id",
            Self::Date => "date",
            Self::Chamber => "chamber",
            Self::SourceFile => "source_file",
            Self::Text => "text",
            Self::TextLength => "text_length",
            Self::ProcessingVersion => "processing_version",
            Self::NChars => "n_chars",
            Self::NWords => "n_words",
        }
    }

    /// Looks up a column by its CSV header name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// One table row; every column is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRow {
    /// Document identifier.
    pub doc_id: Option<String>,
    /// Sitting date.
    pub date: Option<String>,
    /// Chamber name.
    pub chamber: Option<String>,
    /// Source file name.
    pub source_file: Option<String>,
    /// Extracted text.
    pub text: Option<String>,
    /// Text length recorded at ingestion.
    #[serde(deserialize_with = "csv::invalid_option")]
    pub text_length: Option<usize>,
    /// Pipeline version tag.
    pub processing_version: Option<String>,
    /// Character count of `text`.
    #[serde(deserialize_with = "csv::invalid_option")]
    pub n_chars: Option<usize>,
    /// Whitespace-separated word count of `text`.
    #[serde(deserialize_with = "csv::invalid_option")]
    pub n_words: Option<usize>,
}

impl From<&DocumentRecord> for TableRow {
    fn from(record: &DocumentRecord) -> Self {
        Self {
            doc_id: Some(record.doc_id.clone()),
            date: record.date.clone(),
            chamber: record.chamber.clone(),
            source_file: Some(record.source_file.clone()),
            text: Some(record.text.clone()),
            text_length: Some(record.text_length),
            processing_version: Some(record.processing_version.clone()),
            n_chars: None,
            n_words: None,
        }
    }
}

/// Rows plus the set of columns present in the source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    /// Present columns, in canonical order.
    columns: Vec<Column>,
    /// Table rows.
    rows: Vec<TableRow>,
}

impl RecordTable {
    /// Creates a table from explicit columns and rows.
    ///
    /// Values in rows for columns not listed are kept but treated as absent by
    /// presence checks.
    pub fn new(columns: impl IntoIterator<Item = Column>, rows: Vec<TableRow>) -> Self {
        let mut table = Self {
            columns: Vec::new(),
            rows,
        };
        for column in columns {
            table.add_column(column);
        }
        table
    }

    /// Builds a table from ingested records, with the seven record columns present.
    pub fn from_records(records: &[DocumentRecord]) -> Self {
        Self::new(
            Column::ALL.into_iter().take(7),
            records.iter().map(TableRow::from).collect(),
        )
    }

    /// Reads a CSV file with a header row.
    ///
    /// Known columns are mapped by header name and unknown columns are ignored.
    /// Empty fields, and numeric fields that do not parse, read as absent.
    pub fn read_csv(path: &Path) -> Result<Self, AnalysisError> {
        let read_err = |source: csv::Error| AnalysisError::ReadCsv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(read_err)?;
        let columns: Vec<Column> = reader
            .headers()
            .map_err(read_err)?
            .iter()
            .filter_map(Column::from_name)
            .collect();

        let rows = reader
            .deserialize::<TableRow>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_err)?;

        Ok(Self::new(columns, rows))
    }

    /// Returns the present columns in canonical order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns true if `column` is present.
    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// Marks `column` as present. Existing row values are left untouched.
    pub fn add_column(&mut self, column: Column) {
        if let Err(pos) = self.columns.binary_search(&column) {
            self.columns.insert(pos, column);
        }
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Returns the rows for in-place updates.
    pub fn rows_mut(&mut self) -> &mut [TableRow] {
        &mut self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Counts the most frequent terms in the `text` column.
    ///
    /// Missing text counts as empty.
    pub fn top_terms(&self, n: usize, tokenizer: &Tokenizer) -> Vec<TermCount> {
        let has_text = self.has_column(Column::Text);
        top_terms(
            self.rows
                .iter()
                .map(|row| row.text.as_deref().filter(|_| has_text)),
            n,
            tokenizer,
        )
    }
}
