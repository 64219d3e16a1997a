//! Metadata normalization and derived length columns.

use chrono::NaiveDate;
use tracing::info;

use crate::{Column, RecordTable, UNKNOWN_CHAMBER};

/// Canonical date format.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Columns guaranteed to be present after enrichment.
const REQUIRED_COLUMNS: [Column; 4] = [
    Column::Date,
    Column::Chamber,
    Column::SourceFile,
    Column::Text,
];

/// Result of [`enrich`].
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichReport {
    /// The enriched table.
    pub table: RecordTable,
    /// Number of date values cleared as invalid.
    pub cleared_dates: usize,
}

/// Normalizes metadata and derives `n_chars` and `n_words`.
///
/// - `date`, `chamber`, `source_file` and `text` are added if missing
/// - dates that are not real calendar dates in `YYYY-MM-DD` form are cleared
/// - missing chambers become [`UNKNOWN_CHAMBER`]
/// - `n_chars` counts characters and `n_words` whitespace-separated words of `text`
pub fn enrich(mut table: RecordTable) -> EnrichReport {
    for column in REQUIRED_COLUMNS {
        table.add_column(column);
    }
    table.add_column(Column::NChars);
    table.add_column(Column::NWords);

    let mut cleared_dates = 0;
    for row in table.rows_mut() {
        if let Some(date) = row.date.as_deref()
            && !is_canonical_date(date)
        {
            row.date = None;
            cleared_dates += 1;
        }

        if row.chamber.is_none() {
            row.chamber = Some(UNKNOWN_CHAMBER.to_string());
        }

        let text = row.text.as_deref().unwrap_or_default();
        row.n_chars = Some(text.chars().count());
        row.n_words = Some(text.split_whitespace().count());
    }

    if cleared_dates > 0 {
        info!(cleared = cleared_dates, "cleared invalid dates");
    }

    EnrichReport {
        table,
        cleared_dates,
    }
}

/// Returns true if `value` is a real calendar date written exactly as `YYYY-MM-DD`.
pub fn is_canonical_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .is_ok_and(|date| date.format(DATE_FORMAT).to_string() == value)
}
