//! Term frequency and per-chamber summaries.

use std::collections::{BTreeMap, HashMap};

use hansard_text::Tokenizer;
use serde::Serialize;

use crate::{Column, RecordTable};

/// Group key for rows without a chamber.
pub const UNKNOWN_CHAMBER: &str = "Unknown";

/// A term and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    /// The token.
    pub term: String,
    /// Number of occurrences across all texts.
    pub count: usize,
}

impl TermCount {
    /// Creates a term count.
    pub fn new(term: impl Into<String>, count: usize) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

/// Returns the `n` most frequent tokens across `texts`.
///
/// Counts are descending; equal counts keep the order in which the terms were first
/// seen. `None` texts contribute nothing.
pub fn top_terms<'a, I>(texts: I, n: usize, tokenizer: &Tokenizer) -> Vec<TermCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts: Vec<TermCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for text in texts {
        for token in tokenizer.tokenize(text) {
            match index.get(&token) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(token.clone(), counts.len());
                    counts.push(TermCount::new(token, 1));
                }
            }
        }
    }

    // Stable sort keeps first-seen order among ties.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

/// Document and word statistics for one chamber.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChamberSummary {
    /// Chamber name, or [`UNKNOWN_CHAMBER`].
    pub chamber: String,
    /// Number of rows in the group.
    pub docs: usize,
    /// Sum of `n_words`; absent when the table has no `n_words` column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_words: Option<usize>,
    /// Mean of `n_words` over rows that have a value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_words: Option<f64>,
}

/// Running totals for one group.
#[derive(Default)]
struct GroupTotals {
    /// Rows in the group.
    docs: usize,
    /// Sum of word counts.
    words: usize,
    /// Rows contributing a word count.
    counted: usize,
}

/// Groups rows by chamber, in ascending chamber order.
///
/// Rows without a chamber, or every row when the `chamber` column is missing, fall
/// under [`UNKNOWN_CHAMBER`]. Without an `n_words` column only document counts are
/// reported.
pub fn chamber_summary(table: &RecordTable) -> Vec<ChamberSummary> {
    let has_chamber = table.has_column(Column::Chamber);
    let has_words = table.has_column(Column::NWords);

    let mut groups: BTreeMap<&str, GroupTotals> = BTreeMap::new();
    for row in table.rows() {
        let chamber = row
            .chamber
            .as_deref()
            .filter(|_| has_chamber)
            .unwrap_or(UNKNOWN_CHAMBER);
        let totals = groups.entry(chamber).or_default();
        totals.docs += 1;
        if has_words && let Some(words) = row.n_words {
            totals.words += words;
            totals.counted += 1;
        }
    }

    groups
        .into_iter()
        .map(|(chamber, totals)| ChamberSummary {
            chamber: chamber.to_string(),
            docs: totals.docs,
            total_words: has_words.then_some(totals.words),
            avg_words: (has_words && totals.counted > 0)
                .then(|| totals.words as f64 / totals.counted as f64),
        })
        .collect()
}
