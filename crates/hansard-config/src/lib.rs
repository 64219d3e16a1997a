//! Configuration system for hansard.
//!
//! hansard runs with built-in defaults. An optional TOML file, passed explicitly on the
//! command line, can override individual settings: the extraction budget, the filename
//! metadata tables, and the number of terms reported. Every field in the file is
//! optional; anything left out keeps its default.

#![warn(missing_docs)]

mod error;
mod parse;
mod patterns;
mod resolve;

use std::path::{Path, PathBuf};

pub use error::ConfigError;
pub use parse::{
    RawAnalysisSettings, RawChamberRule, RawConfig, RawIngestSettings, RawMetadataSettings,
    parse_config_file, parse_config_str,
};
pub use patterns::{ChamberMatcher, CompiledMetadataRules};
use resolve::resolve_config;
use serde::{Deserialize, Serialize};

/// Default character budget for extracted document text.
pub const DEFAULT_MAX_CHARS: usize = 200_000;

/// Default upper bound on the size of a single source file.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 64 * 1024 * 1024;

/// Default number of terms reported by term-frequency summaries.
pub const DEFAULT_TOP_TERMS: usize = 20;

/// Default filename date pattern: `YYYY`, `MM`, `DD` separated by `-` or `_`.
pub const DEFAULT_DATE_PATTERN: &str = r"(20\d{2})[-_](\d{2})[-_](\d{2})";

/// Top-level resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Ingestion settings.
    pub ingest: IngestSettings,
    /// Filename metadata inference tables.
    pub metadata: MetadataSettings,
    /// Aggregation settings.
    pub analysis: AnalysisSettings,
    /// File the configuration was loaded from, if any.
    pub source: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from a TOML file, applying it over the defaults.
    ///
    /// The metadata tables are compiled once to surface invalid patterns early.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = parse_config_file(path)?;
        let config = resolve_config(raw, Some(path.to_path_buf()));
        config.compile_metadata_rules()?;
        Ok(config)
    }

    /// Loads configuration from `path` if given, otherwise returns the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Compiles the filename metadata tables into matchers.
    pub fn compile_metadata_rules(&self) -> Result<CompiledMetadataRules, ConfigError> {
        CompiledMetadataRules::compile(&self.metadata)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same schema as a configuration file, so it can be saved
    /// and edited as a starting point.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            ingest: self.ingest.clone(),
            metadata: self.metadata.clone(),
            analysis: self.analysis.clone(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Settings for turning XML files into records.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IngestSettings {
    /// Character budget for extracted text; longer text is truncated with a marker.
    pub max_chars: usize,
    /// Files larger than this many bytes are rejected without parsing.
    pub max_file_bytes: u64,
    /// Abort the whole run on the first file that cannot be parsed.
    pub strict: bool,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            strict: false,
        }
    }
}

/// Pattern tables for deriving metadata from file names.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetadataSettings {
    /// Regex with exactly three capture groups: year, month, day.
    pub date_pattern: String,
    /// Chamber keyword table, checked in order; the first match wins.
    pub chambers: Vec<ChamberRule>,
}

impl Default for MetadataSettings {
    fn default() -> Self {
        Self {
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
            chambers: vec![
                ChamberRule::new("Senate", &["senate"]),
                ChamberRule::new("House", &["house", "representatives", "hofreps"]),
            ],
        }
    }
}

/// A chamber name and the filename keywords that identify it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChamberRule {
    /// Chamber name recorded on matching documents.
    pub name: String,
    /// Case-insensitive substrings that select this chamber.
    pub keywords: Vec<String>,
}

impl ChamberRule {
    /// Creates a rule from a name and keyword list.
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Settings for summaries computed over the record table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of terms reported by term frequency.
    pub top_terms: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_terms: DEFAULT_TOP_TERMS,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Ingestion settings.
    ingest: IngestSettings,
    /// Metadata tables.
    metadata: MetadataSettings,
    /// Aggregation settings.
    analysis: AnalysisSettings,
}
