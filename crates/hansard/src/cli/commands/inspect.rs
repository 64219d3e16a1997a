//! Implementation of `hansard inspect`.

use std::process::ExitCode;

use hansard_analysis::top_terms;
use hansard_ingest::truncate_with_marker;

use crate::cli::{
    args::InspectCommand,
    context::CommandContext,
    output::{dim, header, subheader, terms_table, warning},
};

/// Characters of extracted text shown in the preview.
const PREVIEW_CHARS: usize = 400;

/// Builds and shows the record for a single file.
pub fn run(ctx: &CommandContext, cmd: &InspectCommand) -> ExitCode {
    let builder = match ctx.record_builder() {
        Ok(builder) => builder,
        Err(code) => return code,
    };
    let built = match builder.build(&cmd.file) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(error) = &built.recovered_error {
        eprintln!("{} kept text before syntax error: {error}", warning("warning:"));
    }
    let record = built.record;

    println!("--- {} ---", header(&record.source_file));
    println!("doc_id:     {}", record.doc_id);
    println!("date:       {}", record.date.as_deref().unwrap_or("(none)"));
    println!("chamber:    {}", record.chamber.as_deref().unwrap_or("(none)"));
    println!("length:     {} chars", record.text_length);
    println!("{}", dim(&format!("version:    {}", record.processing_version)));
    println!();

    println!("{}", subheader("Text"));
    println!("{}", truncate_with_marker(record.text.clone(), PREVIEW_CHARS));
    println!();

    println!("{}", subheader(&format!("Top {} terms", cmd.limit)));
    let terms = top_terms([Some(record.text.as_str())], cmd.limit, &ctx.tokenizer());
    if terms.is_empty() {
        println!("{}", dim("  (no terms)"));
    } else {
        println!("{}", terms_table(&terms));
    }

    ExitCode::SUCCESS
}
