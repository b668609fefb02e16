//! Sentence splitting and n-gram candidate generation
//!
//! Documents are split into sentence-like units on runs of punctuation,
//! with underscore and hyphen treated as word-internal characters. Newlines
//! are normalized first: a newline followed by a tab is a line continuation
//! (becomes a space), a bare newline ends the sentence (becomes a period).
//!
//! Candidates of order `n` are width-`n` windows over each sentence's word
//! sequence. A window whose first or last word is a stopword is discarded
//! (boundary filtering, not full-phrase filtering).

use crate::nlp::stopwords::StopwordFilter;

/// Check if a character delimits phrases: ASCII punctuation except
/// underscore and hyphen, which are word-internal.
pub fn is_phrase_delimiter(c: char) -> bool {
    c.is_ascii_punctuation() && c != '_' && c != '-'
}

/// Normalize newlines: `\n\t` continues the line, bare `\n`/`\r` end the
/// sentence.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\n\t", " ").replace(['\n', '\r'], ".")
}

/// Split normalized text into sentence-like units on punctuation runs.
///
/// Empty units between consecutive delimiters are dropped.
pub fn split_sentences(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split(is_phrase_delimiter)
        .filter(|unit| !unit.trim().is_empty())
}

/// Candidate phrase generator over a fixed stopword filter
#[derive(Debug, Clone)]
pub struct NgramGenerator<'a> {
    stopwords: &'a StopwordFilter,
}

impl<'a> NgramGenerator<'a> {
    /// Create a generator borrowing the process-lifetime stopword filter
    pub fn new(stopwords: &'a StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Generate candidate phrases of exactly order `n`.
    ///
    /// Order 1 strips delimiter characters from the whole text and splits
    /// on whitespace, bypassing sentence splitting so unigrams at sentence
    /// boundaries are not lost. Higher orders slide a window over each
    /// sentence's words; a sentence shorter than `n` words yields nothing.
    pub fn ngrams(&self, text: &str, n: usize) -> Vec<String> {
        if n == 0 {
            return Vec::new();
        }
        if n == 1 {
            return self.unigrams(text);
        }

        let normalized = normalize_newlines(text);
        let mut candidates = Vec::new();
        for sentence in split_sentences(&normalized) {
            let words: Vec<&str> = sentence.split_whitespace().collect();
            for window in words.windows(n) {
                if !self.stopwords.is_boundary_stopped(window) {
                    candidates.push(window.join(" "));
                }
            }
        }
        candidates
    }

    /// Generate candidates of every order `1..=max_n`, concatenated in
    /// ascending order.
    pub fn all_ngrams(&self, text: &str, max_n: usize) -> Vec<String> {
        let mut candidates = Vec::new();
        for n in 1..=max_n {
            candidates.extend(self.ngrams(text, n));
        }
        candidates
    }

    fn unigrams(&self, text: &str) -> Vec<String> {
        let stripped: String = text.chars().filter(|c| !is_phrase_delimiter(*c)).collect();
        stripped
            .split_whitespace()
            // For a single word both phrase boundaries are the word itself
            .filter(|word| !self.stopwords.is_stopword(word))
            .map(str::to_string)
            .collect()
    }
}
