//! Compilation of the filename metadata tables.
//!
//! The date regex and chamber keyword table are validated once and compiled into
//! matchers that the metadata inferencer consults for every file name.

use regex::Regex;

use crate::{ConfigError, MetadataSettings};

/// Number of capture groups a date pattern must define (year, month, day).
const DATE_GROUPS: usize = 3;

/// A chamber name with its lowercased filename keywords.
#[derive(Debug, Clone)]
pub struct ChamberMatcher {
    /// Chamber name reported on a match.
    name: String,
    /// Lowercased, non-empty keywords.
    keywords: Vec<String>,
}

impl ChamberMatcher {
    /// Returns the chamber name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lowercased keywords.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Checks whether an already-lowercased file name contains any keyword.
    pub fn matches_lowercase(&self, lowercase_name: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowercase_name.contains(keyword.as_str()))
    }
}

/// Compiled filename metadata tables.
#[derive(Debug, Clone)]
pub struct CompiledMetadataRules {
    /// Date regex with three capture groups.
    date_pattern: Regex,
    /// Chamber matchers in precedence order.
    chambers: Vec<ChamberMatcher>,
}

impl CompiledMetadataRules {
    /// Validates and compiles the metadata tables.
    pub fn compile(settings: &MetadataSettings) -> Result<Self, ConfigError> {
        let date_pattern =
            Regex::new(&settings.date_pattern).map_err(|source| ConfigError::InvalidDatePattern {
                pattern: settings.date_pattern.clone(),
                source,
            })?;

        // captures_len includes the implicit whole-match group
        let groups = date_pattern.captures_len() - 1;
        if groups != DATE_GROUPS {
            return Err(ConfigError::DatePatternGroups {
                pattern: settings.date_pattern.clone(),
                groups,
            });
        }

        let chambers = settings
            .chambers
            .iter()
            .map(|rule| {
                let keywords: Vec<String> = rule
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                if keywords.is_empty() {
                    return Err(ConfigError::EmptyChamberKeywords {
                        chamber: rule.name.clone(),
                    });
                }
                Ok(ChamberMatcher {
                    name: rule.name.clone(),
                    keywords,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            date_pattern,
            chambers,
        })
    }

    /// Returns the compiled date regex.
    pub fn date_pattern(&self) -> &Regex {
        &self.date_pattern
    }

    /// Returns chamber matchers in precedence order.
    pub fn chambers(&self) -> &[ChamberMatcher] {
        &self.chambers
    }
}
