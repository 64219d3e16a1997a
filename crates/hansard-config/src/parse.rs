//! Configuration file parsing.
//!
//! Parses a TOML settings file into a `RawConfig` that keeps every field optional,
//! so that unspecified values fall back to defaults during resolution.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Ingestion section.
    pub ingest: Option<RawIngestSettings>,
    /// Metadata inference section.
    pub metadata: Option<RawMetadataSettings>,
    /// Analysis section.
    pub analysis: Option<RawAnalysisSettings>,
}

/// Raw ingestion settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawIngestSettings {
    /// Character budget for extracted text.
    pub max_chars: Option<usize>,
    /// Per-file size guard in bytes.
    pub max_file_bytes: Option<u64>,
    /// Abort on the first unparseable file.
    pub strict: Option<bool>,
}

/// Raw metadata inference settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMetadataSettings {
    /// Filename date regex.
    pub date_pattern: Option<String>,
    /// Chamber keyword table. When present it replaces the built-in table.
    pub chambers: Option<Vec<RawChamberRule>>,
}

/// Raw chamber rule from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct RawChamberRule {
    /// Chamber name.
    pub name: String,
    /// Filename keywords for this chamber.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Raw analysis settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawAnalysisSettings {
    /// Number of terms to report.
    pub top_terms: Option<usize>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.ingest.is_none());
        assert!(config.metadata.is_none());
        assert!(config.analysis.is_none());
    }

    #[test]
    fn parse_partial_ingest() {
        let toml = r#"
[ingest]
max_chars = 500
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let ingest = config.ingest.unwrap();
        assert_eq!(ingest.max_chars, Some(500));
        assert!(ingest.max_file_bytes.is_none());
        assert!(ingest.strict.is_none());
    }

    #[test]
    fn parse_chamber_table() {
        let toml = r#"
[metadata]
date_pattern = '(\d{4})(\d{2})(\d{2})'

[[metadata.chambers]]
name = "Lords"
keywords = ["lords", "hol"]

[[metadata.chambers]]
name = "Commons"
keywords = ["commons"]
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let metadata = config.metadata.unwrap();
        assert_eq!(metadata.date_pattern.as_deref(), Some(r"(\d{4})(\d{2})(\d{2})"));
        let chambers = metadata.chambers.unwrap();
        assert_eq!(chambers.len(), 2);
        assert_eq!(chambers[0].name, "Lords");
        assert_eq!(chambers[0].keywords, vec!["lords", "hol"]);
        assert_eq!(chambers[1].name, "Commons");
    }

    #[test]
    fn parse_analysis() {
        let toml = "[analysis]\ntop_terms = 5\n";
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.analysis.unwrap().top_terms, Some(5));
    }

    #[test]
    fn parse_invalid_toml_reports_path() {
        let err = parse_config_str("[ingest\nmax_chars = ", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn parse_wrong_type_is_error() {
        let toml = "[ingest]\nmax_chars = \"lots\"\n";
        assert!(parse_config_str(toml, Path::new("test.toml")).is_err());
    }
}
