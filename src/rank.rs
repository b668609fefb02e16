//! Top-K phrase selection
//!
//! Selection is by HIGHEST score, descending. Ties break by score-table
//! insertion order (first inserted wins), which makes ranking fully
//! deterministic for a fixed corpus.

use crate::scoring::ScoreTable;
use std::cmp::Ordering;

/// Select the `min(k, table.len())` highest-scoring phrases, descending.
///
/// The sort is stable, so equal scores keep their insertion order.
pub fn top_k(table: &ScoreTable, k: usize) -> Vec<String> {
    let mut entries: Vec<(&str, f64)> = table.iter().collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    entries.truncate(k.min(entries.len()));
    entries
        .into_iter()
        .map(|(phrase, _)| phrase.to_string())
        .collect()
}
