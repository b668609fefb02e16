//! Phrase scoring: score tables and the scorer seam
//!
//! Each scorer produces a [`ScoreTable`] per document: an
//! insertion-ordered phrase→score mapping that is built fresh for one
//! document and dropped after top-K selection. Insertion order doubles as
//! the deterministic ranking tie-break.

pub mod rake;
pub mod statistical;

use crate::errors::Result;
use rustc_hash::FxHashMap;

/// An insertion-ordered mapping from phrase text to score, scoped to one
/// document.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    entries: Vec<(String, f64)>,
    index: FxHashMap<String, usize>,
}

impl ScoreTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert a score, overwriting any existing score for the phrase.
    ///
    /// A re-inserted phrase keeps its original position, so insertion order
    /// reflects first occurrence. Empty phrases are rejected at this
    /// boundary; they must never be scored or looked up.
    pub fn insert(&mut self, phrase: impl Into<String>, score: f64) {
        let phrase = phrase.into();
        debug_assert!(!phrase.is_empty(), "empty phrase in score table");
        if phrase.is_empty() {
            return;
        }
        match self.index.get(&phrase) {
            Some(&pos) => self.entries[pos].1 = score,
            None => {
                self.index.insert(phrase.clone(), self.entries.len());
                self.entries.push((phrase, score));
            }
        }
    }

    /// Look up a phrase's score
    pub fn get(&self, phrase: &str) -> Option<f64> {
        self.index.get(phrase).map(|&pos| self.entries[pos].1)
    }

    /// Check if a phrase is present
    pub fn contains(&self, phrase: &str) -> bool {
        self.index.contains_key(phrase)
    }

    /// Number of distinct phrases
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(phrase, score)| (phrase.as_str(), *score))
    }
}

/// A per-document keyphrase scorer over a fixed corpus.
///
/// Implementations hold read-only corpus state prepared once at
/// construction; `score_document` is stateless per invocation, which is
/// what allows the evaluation scan to run in parallel.
pub trait KeyphraseScorer: Sync {
    /// Build the score table for the document at `index`
    fn score_document(&self, index: usize) -> Result<ScoreTable>;

    /// Number of documents this scorer was prepared over
    fn num_documents(&self) -> usize;
}
