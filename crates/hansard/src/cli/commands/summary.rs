//! Implementation of `hansard summary`.

use std::process::ExitCode;

use hansard_analysis::{ChamberSummary, TermCount, chamber_summary};
use serde::Serialize;

use super::shared::{load_enriched, print_summary};
use crate::cli::{args::SummaryCommand, context::CommandContext, output::print_json};

/// JSON output for `hansard summary`.
#[derive(Serialize)]
struct JsonSummary {
    /// Number of records in the table.
    records: usize,
    /// Dates cleared during enrichment.
    cleared_dates: usize,
    /// Per-chamber statistics.
    chambers: Vec<ChamberSummary>,
    /// Most frequent terms.
    top_terms: Vec<TermCount>,
}

/// Prints chamber statistics and top terms for a record CSV.
pub fn run(ctx: &CommandContext, cmd: &SummaryCommand) -> ExitCode {
    let report = match load_enriched(&cmd.csv) {
        Ok(report) => report,
        Err(code) => return code,
    };
    let limit = cmd.limit.unwrap_or(ctx.config.analysis.top_terms);
    let tokenizer = ctx.tokenizer();

    if cmd.json {
        let output = JsonSummary {
            records: report.table.len(),
            cleared_dates: report.cleared_dates,
            chambers: chamber_summary(&report.table),
            top_terms: report.table.top_terms(limit, &tokenizer),
        };
        return print_json(&output);
    }

    print_summary(&report, limit, &tokenizer);
    ExitCode::SUCCESS
}
