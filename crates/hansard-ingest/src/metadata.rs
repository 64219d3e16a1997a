//! Filename-based metadata inference.
//!
//! Transcript files rarely carry reliable structured metadata, so the sitting date and
//! chamber are derived from the file name alone. Both inferences are best-effort:
//! they return `None` instead of failing, and neither looks at document content.

use hansard_config::CompiledMetadataRules;

/// Metadata derived from a file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMetadata {
    /// Sitting date as `YYYY-MM-DD`, not calendar-validated.
    pub date: Option<String>,
    /// Chamber name from the first matching keyword rule.
    pub chamber: Option<String>,
}

/// Infers both date and chamber from a file name.
pub fn infer_metadata(filename: &str, rules: &CompiledMetadataRules) -> FileMetadata {
    FileMetadata {
        date: infer_date(filename, rules),
        chamber: infer_chamber(filename, rules),
    }
}

/// Infers the chamber by case-insensitive keyword search.
///
/// Rules are checked in table order and the first rule with any matching keyword
/// wins, so a name mentioning two chambers resolves to whichever rule comes first.
pub fn infer_chamber(filename: &str, rules: &CompiledMetadataRules) -> Option<String> {
    let lowercase = filename.to_lowercase();
    rules
        .chambers()
        .iter()
        .find(|chamber| chamber.matches_lowercase(&lowercase))
        .map(|chamber| chamber.name().to_string())
}

/// Infers the sitting date from the first match of the date pattern.
///
/// The three capture groups are reassembled as `YYYY-MM-DD`. Values are not checked
/// against the calendar here; `2025_13_40` yields `2025-13-40`.
pub fn infer_date(filename: &str, rules: &CompiledMetadataRules) -> Option<String> {
    let captures = rules.date_pattern().captures(filename)?;
    let year = captures.get(1)?.as_str();
    let month = captures.get(2)?.as_str();
    let day = captures.get(3)?.as_str();
    Some(format!("{year}-{month}-{day}"))
}
