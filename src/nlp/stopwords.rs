//! Stopword filtering
//!
//! Stopword lists are loaded once per process and membership-tested
//! case-insensitively. A candidate phrase whose first or last word is a
//! stopword is a stop-phrase and is dropped at the candidate boundary;
//! interior stopwords are allowed.

use crate::errors::{KeyrankError, Result};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords and stop-phrases
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Create a filter with the built-in English stopword list
    pub fn english() -> Self {
        let stopwords = get(LANGUAGE::English)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// Create an empty filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Load a filter from a plain-text file, one stopword per line.
    ///
    /// A missing or unreadable file is a fatal configuration error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| KeyrankError::io(path, e))?;
        let stopwords: FxHashSet<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();
        log::debug!(
            "loaded {} stopwords from {}",
            stopwords.len(),
            path.display()
        );
        Ok(Self { stopwords })
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Check if a candidate phrase is boundary-stopped: its first or last
    /// word is a stopword. For a single word both boundaries are the word
    /// itself.
    pub fn is_boundary_stopped(&self, words: &[&str]) -> bool {
        match (words.first(), words.last()) {
            (Some(first), Some(last)) => self.is_stopword(first) || self.is_stopword(last),
            _ => false,
        }
    }

    /// Number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_case_insensitive_membership() {
        let filter = StopwordFilter::from_list(&["the", "on"]);
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("THE"));
        assert!(!filter.is_stopword("cat"));
    }

    #[test]
    fn test_boundary_stopping() {
        let filter = StopwordFilter::from_list(&["the", "on"]);
        // Interior stopword is fine
        assert!(!filter.is_boundary_stopped(&["cat", "the", "mat"]));
        // First or last word stops the phrase
        assert!(filter.is_boundary_stopped(&["the", "cat"]));
        assert!(filter.is_boundary_stopped(&["sat", "on"]));
        assert!(filter.is_boundary_stopped(&["on", "the"]));
        // Single stopword
        assert!(filter.is_boundary_stopped(&["the"]));
        assert!(!filter.is_boundary_stopped(&["cat"]));
        assert!(!filter.is_boundary_stopped(&[]));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "the\nand\n\n  Of  ").unwrap();
        let filter = StopwordFilter::from_file(file.path()).unwrap();
        assert_eq!(filter.len(), 3);
        assert!(filter.is_stopword("of"));
        assert!(filter.is_stopword("OF"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = StopwordFilter::from_file("/nonexistent/stopwords.txt").unwrap_err();
        assert!(matches!(err, KeyrankError::Io { .. }));
    }

    #[test]
    fn test_builtin_english() {
        let filter = StopwordFilter::english();
        assert!(!filter.is_empty());
        assert!(filter.is_stopword("the"));
    }
}
