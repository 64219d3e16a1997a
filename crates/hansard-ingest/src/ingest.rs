//! Directory ingestion pipeline.
//!
//! The [`Ingester`] runs the complete ingestion flow:
//! 1. Discover `*.xml` files in the input directory
//! 2. Build one record per file
//! 3. Apply the [`FailurePolicy`] to files that cannot be parsed, and count files whose
//!    markup broke off partway
//! 4. Optionally write the records to CSV

use std::path::{Path, PathBuf};

use hansard_config::Config;
use tracing::{info, warn};

use crate::{
    DocumentRecord, IngestError, MarkupParser, RecordBuilder, RecoveringXmlParser,
    discover_xml_files, write_records_csv,
};

/// What to do when a single file cannot be turned into a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Skip the file, report it, and continue with the rest.
    #[default]
    Skip,
    /// Stop the run with the file's error.
    Abort,
}

impl FailurePolicy {
    /// Maps the `strict` setting to a policy.
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Abort } else { Self::Skip }
    }
}

/// Statistics from an ingestion run.
#[derive(Debug, Clone, Default)]
pub struct IngestStats {
    /// Number of `*.xml` files found.
    pub files_discovered: usize,
    /// Number of records built.
    pub records_built: usize,
    /// Number of files skipped due to errors.
    pub files_skipped: usize,
    /// Per-file failures (file path, error message).
    pub errors: Vec<(PathBuf, String)>,
    /// Files whose records hold only the text read before a syntax error
    /// (file path, error message).
    pub partial_extractions: Vec<(PathBuf, String)>,
}

impl IngestStats {
    /// Returns true if every discovered file produced a record.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Callback interface for ingestion progress.
pub trait IngestReporter {
    /// Called before a file is read.
    fn on_file_start(&mut self, path: &Path, current: usize, total: usize);

    /// Called when a record was built.
    fn on_file_done(&mut self, path: &Path, record: &DocumentRecord);

    /// Called when a file was skipped.
    fn on_file_error(&mut self, path: &Path, error: &str);

    /// Called after [`on_file_done`](Self::on_file_done) when the record's text was
    /// cut short by a syntax error.
    fn on_file_partial(&mut self, path: &Path, error: &str);

    /// Called when every file has been processed.
    fn on_complete(&mut self, stats: &IngestStats);
}

/// A no-op reporter.
pub struct SilentReporter;

impl IngestReporter for SilentReporter {
    fn on_file_start(&mut self, _path: &Path, _current: usize, _total: usize) {}
    fn on_file_done(&mut self, _path: &Path, _record: &DocumentRecord) {}
    fn on_file_error(&mut self, _path: &Path, _error: &str) {}
    fn on_file_partial(&mut self, _path: &Path, _error: &str) {}
    fn on_complete(&mut self, _stats: &IngestStats) {}
}

/// Records and statistics from [`Ingester::ingest_dir`].
#[derive(Debug, Clone, Default)]
pub struct IngestOutcome {
    /// Records in file name order.
    pub records: Vec<DocumentRecord>,
    /// Run statistics.
    pub stats: IngestStats,
}

/// Turns a directory of transcripts into records.
#[derive(Debug, Clone)]
pub struct Ingester<P = RecoveringXmlParser> {
    /// Per-file record builder.
    builder: RecordBuilder<P>,
    /// Handling of per-file failures.
    policy: FailurePolicy,
}

impl Ingester {
    /// Creates an ingester from configuration.
    ///
    /// The failure policy follows `ingest.strict`.
    pub fn new(config: &Config) -> Result<Self, IngestError> {
        let builder = RecordBuilder::new(config)?;
        Ok(Self::with_builder(
            builder,
            FailurePolicy::from_strict(config.ingest.strict),
        ))
    }
}

impl<P: MarkupParser> Ingester<P> {
    /// Creates an ingester around an existing builder.
    pub fn with_builder(builder: RecordBuilder<P>, policy: FailurePolicy) -> Self {
        Self { builder, policy }
    }

    /// Replaces the failure policy.
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the active failure policy.
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Builds records for every `*.xml` file directly inside `dir`.
    ///
    /// Under [`FailurePolicy::Skip`] a failing file is reported and the run continues;
    /// under [`FailurePolicy::Abort`] the first failure is returned.
    pub fn ingest_dir(
        &self,
        dir: &Path,
        reporter: &mut dyn IngestReporter,
    ) -> Result<IngestOutcome, IngestError> {
        let files = discover_xml_files(dir)?;
        let total = files.len();
        let mut outcome = IngestOutcome {
            records: Vec::with_capacity(total),
            stats: IngestStats {
                files_discovered: total,
                ..Default::default()
            },
        };

        for (i, path) in files.iter().enumerate() {
            reporter.on_file_start(path, i + 1, total);

            match self.builder.build(path) {
                Ok(built) => {
                    reporter.on_file_done(path, &built.record);
                    if let Some(error) = built.recovered_error {
                        reporter.on_file_partial(path, &error);
                        outcome.stats.partial_extractions.push((path.clone(), error));
                    }
                    outcome.records.push(built.record);
                    outcome.stats.records_built += 1;
                }
                Err(e) if self.policy == FailurePolicy::Abort => return Err(e),
                Err(e) => {
                    let message = e.to_string();
                    warn!(path = %path.display(), error = %message, "skipping file");
                    reporter.on_file_error(path, &message);
                    outcome.stats.files_skipped += 1;
                    outcome.stats.errors.push((path.clone(), message));
                    // Continue with other files
                }
            }
        }

        info!(
            discovered = outcome.stats.files_discovered,
            built = outcome.stats.records_built,
            skipped = outcome.stats.files_skipped,
            partial = outcome.stats.partial_extractions.len(),
            "ingestion complete"
        );
        reporter.on_complete(&outcome.stats);

        Ok(outcome)
    }

    /// Ingests `dir` and writes the records to `output` as CSV.
    pub fn ingest_to_csv(
        &self,
        dir: &Path,
        output: &Path,
        reporter: &mut dyn IngestReporter,
    ) -> Result<IngestStats, IngestError> {
        let outcome = self.ingest_dir(dir, reporter)?;
        write_records_csv(&outcome.records, output)?;
        Ok(outcome.stats)
    }
}
