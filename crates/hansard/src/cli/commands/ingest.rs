//! Implementation of `hansard ingest`.

use std::process::ExitCode;

use super::shared::ingest_to_csv;
use crate::cli::{args::IngestCommand, context::CommandContext};

/// Converts a directory of transcripts into a record CSV.
pub fn run(ctx: &CommandContext, cmd: &IngestCommand) -> ExitCode {
    match ingest_to_csv(ctx, &cmd.paths) {
        Ok(_) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}
