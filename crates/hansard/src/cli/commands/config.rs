//! Implementation of `hansard config`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::dim};

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    match &config.source {
        Some(path) => println!("{}", dim(&format!("# loaded from {}", path.display()))),
        None => println!("{}", dim("# built-in defaults")),
    }
    print!("{}", config.settings_to_toml());
    ExitCode::SUCCESS
}
