//! Terminal styling, tables and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use hansard_analysis::{ChamberSummary, RecordTable, TermCount};
use serde::Serialize;

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Creates a table with the shared preset.
fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(header);
    table
}

/// Right-aligned numeric cell.
fn number(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

/// Renders per-chamber statistics; word columns appear only when available.
pub fn chamber_table(summary: &[ChamberSummary]) -> Table {
    let with_words = summary.iter().any(|s| s.total_words.is_some());
    let mut table = if with_words {
        new_table(vec!["Chamber", "Docs", "Total words", "Avg words"])
    } else {
        new_table(vec!["Chamber", "Docs"])
    };

    for row in summary {
        let mut cells = vec![Cell::new(&row.chamber), number(row.docs)];
        if with_words {
            cells.push(number(row.total_words.unwrap_or_default()));
            cells.push(number(
                row.avg_words
                    .map_or_else(|| "-".to_string(), |avg| format!("{avg:.1}")),
            ));
        }
        table.add_row(cells);
    }
    table
}

/// Renders ranked terms.
pub fn terms_table(terms: &[TermCount]) -> Table {
    let mut table = new_table(vec!["#", "Term", "Count"]);
    for (rank, term) in terms.iter().enumerate() {
        table.add_row(vec![number(rank + 1), Cell::new(&term.term), number(term.count)]);
    }
    table
}

/// Renders the first `limit` rows of a record table.
pub fn preview_table(records: &RecordTable, limit: usize) -> Table {
    let mut table = new_table(vec!["doc_id", "date", "chamber", "text_length"]);
    for row in records.rows().iter().take(limit) {
        table.add_row(vec![
            Cell::new(row.doc_id.as_deref().unwrap_or_default()),
            Cell::new(row.date.as_deref().unwrap_or_default()),
            Cell::new(row.chamber.as_deref().unwrap_or_default()),
            number(row.text_length.map(|n| n.to_string()).unwrap_or_default()),
        ]);
    }
    table
}
