//! Implementation of `hansard run`.

use std::process::ExitCode;

use super::shared::{ingest_to_csv, load_enriched, print_summary};
use crate::cli::{
    args::RunCommand,
    context::CommandContext,
    output::{dim, header, preview_table, subheader},
};

/// Rows shown in the record preview.
const PREVIEW_ROWS: usize = 5;

/// Ingests a directory, re-reads the CSV, and prints a preview and summary.
pub fn run(ctx: &CommandContext, cmd: &RunCommand) -> ExitCode {
    let stats = match ingest_to_csv(ctx, &cmd.paths) {
        Ok(stats) => stats,
        Err(code) => return code,
    };
    let report = match load_enriched(&cmd.paths.output_csv) {
        Ok(report) => report,
        Err(code) => return code,
    };

    println!();
    println!(
        "--- {} ---",
        header(&format!(
            "{} records from {} files",
            stats.records_built, stats.files_discovered
        ))
    );
    println!();

    println!("{}", subheader("Preview"));
    if report.table.is_empty() {
        println!("{}", dim("  (no records)"));
    } else {
        println!("{}", preview_table(&report.table, PREVIEW_ROWS));
    }
    println!();

    print_summary(&report, cmd.limit, &ctx.tokenizer());
    ExitCode::SUCCESS
}
