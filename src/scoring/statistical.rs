//! Statistical phrase scoring: tf × idf × relpos
//!
//! The composite score combines three signals over a candidate list:
//! term frequency (log-damped raw count), inverse document frequency
//! (corpus rarity), and the relative position of the phrase's first
//! occurrence in the rejoined document text. An optional POS boost
//! multiplies the score of phrases made entirely of noun-like or
//! adjective-like words.

use crate::corpus::Corpus;
use crate::errors::{KeyrankError, Result};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tagger::PosTagger;
use crate::nlp::tokenizer::NgramGenerator;
use crate::scoring::{KeyphraseScorer, ScoreTable};
use crate::types::ExtractionConfig;

/// Multiplier applied to all-noun/adjective phrases when the POS boost is
/// enabled
pub const POS_BOOST: f64 = 1.66;

/// Statistical scorer over a prepared corpus candidate collection.
///
/// The per-document candidate lists and their rejoined texts are computed
/// once at construction; scoring a document is a pure read afterwards. The
/// tagger handle, when attached, is borrowed for the scorer's lifetime and
/// consulted at most once per distinct phrase.
#[derive(Debug)]
pub struct StatisticalScorer<'a> {
    /// Candidate list per document, in corpus order
    collection: Vec<Vec<String>>,
    /// Space-joined candidate list per document, for position lookup
    joined: Vec<String>,
    tagger: Option<&'a dyn PosTagger>,
    config: ExtractionConfig,
}

impl<'a> StatisticalScorer<'a> {
    /// Prepare a scorer over candidates of exactly order `n`
    pub fn for_ngrams(
        corpus: &Corpus,
        stopwords: &StopwordFilter,
        n: usize,
        config: ExtractionConfig,
    ) -> Result<Self> {
        let generator = NgramGenerator::new(stopwords);
        Self::from_collection(
            corpus
                .documents
                .iter()
                .map(|doc| generator.ngrams(&doc.text, n))
                .collect(),
            config,
        )
    }

    /// Prepare a scorer over pooled candidates of orders `1..=max_n`
    /// (used by the POS-filtered model)
    pub fn for_all_ngrams(
        corpus: &Corpus,
        stopwords: &StopwordFilter,
        max_n: usize,
        config: ExtractionConfig,
    ) -> Result<Self> {
        let generator = NgramGenerator::new(stopwords);
        Self::from_collection(
            corpus
                .documents
                .iter()
                .map(|doc| generator.all_ngrams(&doc.text, max_n))
                .collect(),
            config,
        )
    }

    fn from_collection(collection: Vec<Vec<String>>, config: ExtractionConfig) -> Result<Self> {
        if collection.is_empty() {
            return Err(KeyrankError::empty_corpus(
                "statistical scoring requires at least one document",
            ));
        }
        let joined = collection.iter().map(|doc| doc.join(" ")).collect();
        Ok(Self {
            collection,
            joined,
            tagger: None,
            config,
        })
    }

    /// Attach a POS tagger for the boost check
    pub fn with_tagger(mut self, tagger: &'a dyn PosTagger) -> Self {
        self.tagger = Some(tagger);
        self
    }

    /// Log-damped term frequency: `ln(1 + raw_count)`.
    ///
    /// Raw count is exact string equality against every candidate
    /// occurrence in the document, not substring match.
    pub fn term_frequency(&self, phrase: &str, index: usize) -> f64 {
        let raw = self.collection[index]
            .iter()
            .filter(|candidate| candidate.as_str() == phrase)
            .count();
        (1.0 + raw as f64).ln()
    }

    /// Inverse document frequency: `ln(corpus_size / document_frequency)`.
    ///
    /// A phrase occurring in zero documents is a fatal data error, never a
    /// NaN score: every scored phrase must come from the corpus it scores
    /// against.
    pub fn inverse_document_frequency(&self, phrase: &str) -> Result<f64> {
        let df = self
            .collection
            .iter()
            .filter(|doc| doc.iter().any(|candidate| candidate == phrase))
            .count();
        if df == 0 {
            return Err(KeyrankError::zero_document_frequency(phrase));
        }
        Ok((self.collection.len() as f64 / df as f64).ln())
    }

    /// Relative position of the phrase's first occurrence in the rejoined
    /// document text.
    ///
    /// This is a substring search over the space-joined candidate list, so
    /// it can match inside a longer token, an accepted approximation.
    pub fn relative_position(&self, phrase: &str, index: usize) -> Result<f64> {
        let joined = &self.joined[index];
        let position = joined
            .find(phrase)
            .ok_or_else(|| KeyrankError::phrase_not_in_document(phrase))?;
        Ok(position as f64 / joined.len() as f64)
    }

    /// Composite score: `tf * idf * relpos`, with the POS boost applied
    /// when configured and a tagger is attached.
    pub fn score(&self, phrase: &str, index: usize) -> Result<f64> {
        let tf = self.term_frequency(phrase, index);
        let idf = self.inverse_document_frequency(phrase)?;
        let relpos = self.relative_position(phrase, index)?;
        let mut score = tf * idf * relpos;

        if self.config.apply_pos_boost {
            if let Some(tagger) = self.tagger {
                if tagger.is_noun_adjective_phrase(phrase) {
                    score *= POS_BOOST;
                }
            }
        }
        Ok(score)
    }
}

impl KeyphraseScorer for StatisticalScorer<'_> {
    fn score_document(&self, index: usize) -> Result<ScoreTable> {
        let candidates = &self.collection[index];
        let mut table = ScoreTable::with_capacity(candidates.len());
        for candidate in candidates {
            // Duplicate occurrences score identically; tag and score each
            // distinct phrase once.
            if table.contains(candidate) {
                continue;
            }
            let score = self.score(candidate, index)?;
            table.insert(candidate.clone(), score);
        }
        Ok(table)
    }

    fn num_documents(&self) -> usize {
        self.collection.len()
    }
}
