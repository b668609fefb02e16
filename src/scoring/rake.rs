//! RAKE-style degree scoring
//!
//! Stopwords act as phrase boundaries, never as scored tokens. Content
//! phrases are maximal runs of consecutive non-stopwords inside each
//! punctuation-delimited candidate; each phrase scores as the sum of its
//! words' degrees. A word's degree is a degree/frequency ratio computed
//! from a local adjacency tally over the full word sequence rather than a
//! global co-occurrence graph.

use crate::corpus::Corpus;
use crate::errors::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{is_phrase_delimiter, normalize_newlines};
use crate::scoring::{KeyphraseScorer, ScoreTable};
use rustc_hash::{FxHashMap, FxHashSet};

/// Degree of `word`: scan adjacent pairs of the full (unfiltered) word
/// sequence; each occurrence of `word` as the left element counts toward
/// `counter`, and each content word it immediately precedes is tallied.
/// The tally entry for `word` itself is then set to `counter`, and the
/// degree is the tally sum divided by `counter`.
///
/// A word whose every occurrence is sequence-final has `counter == 0`;
/// its degree is 1.0 (a word contributes at least its own occurrence).
pub fn word_degree(word: &str, words: &[&str], content: &FxHashSet<&str>) -> f64 {
    let mut tally: FxHashMap<&str, u32> = FxHashMap::default();
    let mut counter: u32 = 0;
    for pair in words.windows(2) {
        if pair[0] == word {
            if content.contains(pair[1]) {
                *tally.entry(pair[1]).or_insert(0) += 1;
            }
            counter += 1;
        }
    }
    if counter == 0 {
        return 1.0;
    }
    tally.insert(word, counter);
    let sum: u32 = tally.values().sum();
    f64::from(sum) / f64::from(counter)
}

/// Split normalized text into content phrases: for each
/// punctuation-delimited candidate, multi-word candidates yield maximal
/// runs of consecutive content words; single-word candidates survive iff
/// the word is a content word. Empty fragments are never emitted.
pub fn content_phrases(normalized: &str, content: &FxHashSet<&str>) -> Vec<String> {
    let mut phrases = Vec::new();
    for candidate in normalized.split(is_phrase_delimiter) {
        let words: Vec<&str> = candidate.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            [single] => {
                if content.contains(single) {
                    phrases.push((*single).to_string());
                }
            }
            _ => {
                let mut run: Vec<&str> = Vec::new();
                for &word in &words {
                    if content.contains(word) {
                        run.push(word);
                    } else if !run.is_empty() {
                        phrases.push(run.join(" "));
                        run.clear();
                    }
                }
                if !run.is_empty() {
                    phrases.push(run.join(" "));
                }
            }
        }
    }
    phrases
}

/// Score every content phrase of the document text.
///
/// A one-character phrase scores as its word's degree; any other phrase
/// scores as the sum of its words' degrees, skipping empty splits.
pub fn score_phrases(text: &str, stopwords: &StopwordFilter) -> ScoreTable {
    let normalized = normalize_newlines(text);

    // Full word sequence: delimiters become spaces, then whitespace split
    let despaced: String = normalized
        .chars()
        .map(|c| if is_phrase_delimiter(c) { ' ' } else { c })
        .collect();
    let words: Vec<&str> = despaced.split_whitespace().collect();

    // Content words: order and duplicates preserved, membership set derived
    let content_seq: Vec<&str> = words
        .iter()
        .copied()
        .filter(|word| !stopwords.is_stopword(word))
        .collect();
    let content: FxHashSet<&str> = content_seq.iter().copied().collect();

    let mut degrees: FxHashMap<&str, f64> = FxHashMap::default();
    for &word in &content_seq {
        degrees
            .entry(word)
            .or_insert_with(|| word_degree(word, &words, &content));
    }

    let mut table = ScoreTable::new();
    for phrase in content_phrases(&normalized, &content) {
        let score = if phrase.chars().count() == 1 {
            degrees[phrase.as_str()]
        } else {
            phrase
                .split(' ')
                .filter(|word| !word.is_empty())
                .map(|word| degrees[word])
                .sum()
        };
        table.insert(phrase, score);
    }
    table
}

/// RAKE scorer over a borrowed corpus
pub struct RakeScorer<'a> {
    corpus: &'a Corpus,
    stopwords: &'a StopwordFilter,
}

impl<'a> RakeScorer<'a> {
    /// Create a scorer borrowing the corpus and stopword filter
    pub fn new(corpus: &'a Corpus, stopwords: &'a StopwordFilter) -> Self {
        Self { corpus, stopwords }
    }
}

impl KeyphraseScorer for RakeScorer<'_> {
    fn score_document(&self, index: usize) -> Result<ScoreTable> {
        Ok(score_phrases(
            &self.corpus.documents[index].text,
            self.stopwords,
        ))
    }

    fn num_documents(&self) -> usize {
        self.corpus.documents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fox_scenario_degrees() {
        // "quick brown fox. lazy dog." with no stopwords:
        // the full word sequence is [quick, brown, fox, lazy, dog].
        let stopwords = StopwordFilter::empty();
        let table = score_phrases("quick brown fox. lazy dog.", &stopwords);

        let phrases: Vec<&str> = table.iter().map(|(p, _)| p).collect();
        assert_eq!(phrases, vec!["quick brown fox", "lazy dog"]);

        // quick: co-occurs once with brown, counted once for itself,
        // counter 1 -> degree 2. Same for brown, fox (fox precedes lazy
        // across the sentence boundary in the flat word sequence), lazy.
        // dog is sequence-final: counter 0 -> degree 1.
        assert!((table.get("quick brown fox").unwrap() - 6.0).abs() < 1e-12);
        assert!((table.get("lazy dog").unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_word_degree_exact_arithmetic() {
        let words = vec!["quick", "brown", "fox", "lazy", "dog"];
        let content: FxHashSet<&str> = words.iter().copied().collect();
        assert!((word_degree("quick", &words, &content) - 2.0).abs() < 1e-12);
        assert!((word_degree("brown", &words, &content) - 2.0).abs() < 1e-12);
        // Sequence-final word: counter == 0
        assert!((word_degree("dog", &words, &content) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_word_degree_at_least_one() {
        // Degree >= 1 whenever the word occurs as a left element at least
        // once: the tally includes the word's own counter.
        let words = vec!["alpha", "beta", "alpha", "gamma", "alpha"];
        let content: FxHashSet<&str> = ["alpha", "beta", "gamma"].into_iter().collect();
        assert!(word_degree("alpha", &words, &content) >= 1.0);
        assert!(word_degree("beta", &words, &content) >= 1.0);
    }

    #[test]
    fn test_word_degree_repeated_occurrences() {
        // alpha precedes beta twice and gamma once; counter 3.
        // tally: {beta: 2, gamma: 1, alpha: 3} -> degree 6/3 = 2.
        let words = vec!["alpha", "beta", "alpha", "beta", "alpha", "gamma"];
        let content: FxHashSet<&str> = ["alpha", "beta", "gamma"].into_iter().collect();
        assert!((word_degree("alpha", &words, &content) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_stopwords_break_phrases() {
        let stopwords = StopwordFilter::from_list(&["the", "over"]);
        let table = score_phrases("quick brown fox jumps over the lazy dog", &stopwords);

        let phrases: Vec<&str> = table.iter().map(|(p, _)| p).collect();
        assert_eq!(phrases, vec!["quick brown fox jumps", "lazy dog"]);
    }

    #[test]
    fn test_single_word_candidates() {
        let stopwords = StopwordFilter::from_list(&["the"]);
        let table = score_phrases("networks. the. routing", &stopwords);

        let phrases: Vec<&str> = table.iter().map(|(p, _)| p).collect();
        // "the" is a stopword; the other single-word candidates survive
        assert_eq!(phrases, vec!["networks", "routing"]);
    }

    #[test]
    fn test_no_empty_phrases_in_table() {
        let stopwords = StopwordFilter::from_list(&["the", "of"]);
        // Candidates reducing to nothing must not leave empty entries
        let table = score_phrases("the of. , .. the", &stopwords);
        assert!(table.is_empty());
    }

    #[test]
    fn test_stopword_check_is_case_insensitive() {
        let stopwords = StopwordFilter::from_list(&["the"]);
        let table = score_phrases("The quick fox", &stopwords);
        let phrases: Vec<&str> = table.iter().map(|(p, _)| p).collect();
        assert_eq!(phrases, vec!["quick fox"]);
    }

    #[test]
    fn test_single_word_document() {
        let stopwords = StopwordFilter::empty();
        let table = score_phrases("cat", &stopwords);
        assert_eq!(table.len(), 1);
        // Lone word: counter 0 -> degree 1.0, no NaN
        assert!((table.get("cat").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_hyphenated_words_stay_whole() {
        let stopwords = StopwordFilter::empty();
        let table = score_phrases("self-organizing maps", &stopwords);
        let phrases: Vec<&str> = table.iter().map(|(p, _)| p).collect();
        assert_eq!(phrases, vec!["self-organizing maps"]);
    }
}
