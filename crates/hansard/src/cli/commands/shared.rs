//! Helpers shared by the ingesting and summarizing commands.

use std::{path::Path, process::ExitCode};

use hansard_analysis::{EnrichReport, RecordTable, chamber_summary, enrich};
use hansard_ingest::{DocumentRecord, IngestReporter, IngestStats};
use hansard_text::Tokenizer;
use tracing::debug;

use crate::cli::{
    args::IngestPaths,
    context::CommandContext,
    output::{chamber_table, dim, subheader, terms_table, warning},
};

/// Reports skipped and partially recovered files on stderr as they happen.
pub struct StderrReporter;

impl IngestReporter for StderrReporter {
    fn on_file_start(&mut self, path: &Path, current: usize, total: usize) {
        debug!("[{current}/{total}] {}", path.display());
    }

    fn on_file_done(&mut self, _path: &Path, _record: &DocumentRecord) {}

    fn on_file_error(&mut self, path: &Path, error: &str) {
        eprintln!("{} skipped {}: {error}", warning("warning:"), path.display());
    }

    fn on_file_partial(&mut self, path: &Path, error: &str) {
        eprintln!(
            "{} kept text before syntax error in {}: {error}",
            warning("warning:"),
            path.display()
        );
    }

    fn on_complete(&mut self, stats: &IngestStats) {
        if !stats.is_success() {
            eprintln!(
                "{}",
                warning(&format!(
                    "{} of {} files skipped",
                    stats.files_skipped, stats.files_discovered
                ))
            );
        }
        if !stats.partial_extractions.is_empty() {
            eprintln!(
                "{}",
                warning(&format!(
                    "{} of {} files only partially extracted",
                    stats.partial_extractions.len(),
                    stats.files_discovered
                ))
            );
        }
    }
}

/// Ingests `paths.xml_dir` into `paths.output_csv` and prints the generated path.
pub fn ingest_to_csv(ctx: &CommandContext, paths: &IngestPaths) -> Result<IngestStats, ExitCode> {
    let ingester = ctx.ingester(paths.strict)?;
    let stats = ingester
        .ingest_to_csv(&paths.xml_dir, &paths.output_csv, &mut StderrReporter)
        .map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;
    println!("Generated: {}", paths.output_csv.display());
    Ok(stats)
}

/// Reads a record CSV and enriches it.
pub fn load_enriched(path: &Path) -> Result<EnrichReport, ExitCode> {
    let table = RecordTable::read_csv(path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })?;
    Ok(enrich(table))
}

/// Prints the chamber summary and top terms of an enriched table.
pub fn print_summary(report: &EnrichReport, limit: usize, tokenizer: &Tokenizer) {
    let table = &report.table;

    println!("{}", subheader("Chamber summary"));
    if table.is_empty() {
        println!("{}", dim("  (no records)"));
    } else {
        println!("{}", chamber_table(&chamber_summary(table)));
    }
    if report.cleared_dates > 0 {
        println!("{}", dim(&format!("{} invalid dates cleared", report.cleared_dates)));
    }
    println!();

    println!("{}", subheader(&format!("Top {limit} terms")));
    let terms = table.top_terms(limit, tokenizer);
    if terms.is_empty() {
        println!("{}", dim("  (no terms)"));
    } else {
        println!("{}", terms_table(&terms));
    }
}
