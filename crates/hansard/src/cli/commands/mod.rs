//! Command implementations and dispatch.

pub mod config;
pub mod ingest;
pub mod inspect;
pub mod run;
mod shared;
pub mod summary;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Ingest(cmd) => ingest::run(ctx, &cmd),
        Commands::Summary(cmd) => summary::run(ctx, &cmd),
        Commands::Run(cmd) => run::run(ctx, &cmd),
        Commands::Inspect(cmd) => inspect::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
