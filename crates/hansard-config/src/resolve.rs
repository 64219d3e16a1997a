//! Resolution of raw settings over defaults.

use std::path::PathBuf;

use crate::{
    AnalysisSettings, ChamberRule, Config, IngestSettings, MetadataSettings, RawAnalysisSettings,
    RawConfig, RawIngestSettings, RawMetadataSettings,
};

/// Applies a parsed file over the built-in defaults.
pub fn resolve_config(raw: RawConfig, source: Option<PathBuf>) -> Config {
    Config {
        ingest: resolve_ingest(raw.ingest.unwrap_or_default()),
        metadata: resolve_metadata(raw.metadata.unwrap_or_default()),
        analysis: resolve_analysis(raw.analysis.unwrap_or_default()),
        source,
    }
}

/// Resolves the `[ingest]` section.
fn resolve_ingest(raw: RawIngestSettings) -> IngestSettings {
    let defaults = IngestSettings::default();
    IngestSettings {
        max_chars: raw.max_chars.unwrap_or(defaults.max_chars),
        max_file_bytes: raw.max_file_bytes.unwrap_or(defaults.max_file_bytes),
        strict: raw.strict.unwrap_or(defaults.strict),
    }
}

/// Resolves the `[metadata]` section. A chamber table replaces the default table wholesale.
fn resolve_metadata(raw: RawMetadataSettings) -> MetadataSettings {
    let defaults = MetadataSettings::default();
    MetadataSettings {
        date_pattern: raw.date_pattern.unwrap_or(defaults.date_pattern),
        chambers: raw.chambers.map_or(defaults.chambers, |rules| {
            rules
                .into_iter()
                .map(|rule| ChamberRule {
                    name: rule.name,
                    keywords: rule.keywords,
                })
                .collect()
        }),
    }
}

/// Resolves the `[analysis]` section.
fn resolve_analysis(raw: RawAnalysisSettings) -> AnalysisSettings {
    let defaults = AnalysisSettings::default();
    AnalysisSettings {
        top_terms: raw.top_terms.unwrap_or(defaults.top_terms),
    }
}
