//! Shared context for running CLI commands.

use std::{path::Path, process::ExitCode};

use hansard_config::Config;
use hansard_ingest::{FailurePolicy, Ingester, RecordBuilder};
use hansard_text::Tokenizer;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Loaded configuration (defaults when no `--config` was given).
    pub config: Config,
}

impl CommandContext {
    /// Loads configuration from the optional `--config` path.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ExitCode> {
        let config = Config::load_optional(config_path).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;
        Ok(Self { config })
    }

    /// Builds an ingester; `strict` from the command line overrides the configured policy.
    pub fn ingester(&self, strict: bool) -> Result<Ingester, ExitCode> {
        let ingester = Ingester::new(&self.config).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;
        Ok(if strict {
            ingester.with_policy(FailurePolicy::Abort)
        } else {
            ingester
        })
    }

    /// Builds a single-file record builder.
    pub fn record_builder(&self) -> Result<RecordBuilder, ExitCode> {
        RecordBuilder::new(&self.config).map_err(|e| {
            eprintln!("error: invalid configuration: {e}");
            ExitCode::FAILURE
        })
    }

    /// Returns the tokenizer used for term statistics.
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new()
    }
}
