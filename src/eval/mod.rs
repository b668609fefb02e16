//! Corpus evaluation: per-document precision against reference keywords
//!
//! The evaluator runs a scorer across every document, selects the top-K
//! phrases, and compares them case-insensitively against that document's
//! reference keyword set. Per-corpus aggregation uses independent
//! max/min/mean reductions, so best and worst can both move on the same
//! document.

pub mod report;

use crate::corpus::{Corpus, ReferenceSet};
use crate::errors::{KeyrankError, Result};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tagger::HeuristicTagger;
use crate::rank::top_k;
use crate::scoring::rake::RakeScorer;
use crate::scoring::statistical::StatisticalScorer;
use crate::scoring::KeyphraseScorer;
use crate::types::{ExtractionConfig, ModelKind, PrecisionSummary};
use rustc_hash::FxHashSet;

/// Precision evaluator over a corpus/reference pairing.
///
/// Construction fails fast on an empty corpus or a document/reference
/// count mismatch; evaluation afterwards is a pure scan.
#[derive(Debug)]
pub struct Evaluator<'a> {
    references: &'a ReferenceSet,
    num_documents: usize,
    top_k: usize,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator, validating corpus and reference set sizes
    pub fn new(corpus: &Corpus, references: &'a ReferenceSet, top_k: usize) -> Result<Self> {
        if corpus.is_empty() {
            return Err(KeyrankError::empty_corpus(
                "evaluation requires at least one document",
            ));
        }
        if corpus.len() != references.len() {
            return Err(KeyrankError::corpus_mismatch(
                corpus.len(),
                references.len(),
            ));
        }
        Ok(Self {
            references,
            num_documents: corpus.len(),
            top_k,
        })
    }

    /// Run the scorer across the corpus and aggregate precision.
    ///
    /// Deterministic: the same corpus and scorer always produce identical
    /// numbers. With the `parallel` feature the per-document scan is
    /// distributed; the reduction is order-independent.
    pub fn evaluate(&self, scorer: &dyn KeyphraseScorer) -> Result<PrecisionSummary> {
        if scorer.num_documents() != self.num_documents {
            return Err(KeyrankError::corpus_mismatch(
                scorer.num_documents(),
                self.num_documents,
            ));
        }

        #[cfg(feature = "parallel")]
        let precisions = {
            use rayon::prelude::*;
            (0..self.num_documents)
                .into_par_iter()
                .map(|index| self.document_precision(index, scorer))
                .collect::<Result<Vec<_>>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let precisions = (0..self.num_documents)
            .map(|index| self.document_precision(index, scorer))
            .collect::<Result<Vec<_>>>()?;

        Ok(PrecisionSummary::from_precisions(&precisions))
    }

    /// Precision of one document: case-insensitive matches over the
    /// selected keyword count. A document yielding no phrases scores 0.0;
    /// an empty reference set yields 0/K.
    fn document_precision(&self, index: usize, scorer: &dyn KeyphraseScorer) -> Result<f64> {
        let table = scorer.score_document(index)?;
        let keywords = top_k(&table, self.top_k);
        if keywords.is_empty() {
            return Ok(0.0);
        }

        let reference: FxHashSet<String> = self.references.keywords[index]
            .iter()
            .map(|keyword| keyword.to_lowercase())
            .collect();
        let matches = keywords
            .iter()
            .filter(|keyword| reference.contains(&keyword.to_lowercase()))
            .count();

        Ok(matches as f64 / keywords.len() as f64)
    }
}

/// Evaluate all five model configurations against one corpus, returning
/// report rows in their fixed order.
///
/// The heuristic tagger is constructed once here and borrowed by the
/// POS-filtered model's scorer.
pub fn run_all_models(
    corpus: &Corpus,
    references: &ReferenceSet,
    stopwords: &StopwordFilter,
    config: &ExtractionConfig,
) -> Result<Vec<(ModelKind, PrecisionSummary)>> {
    config.validate()?;
    let evaluator = Evaluator::new(corpus, references, config.top_k)?;
    let tagger = HeuristicTagger::new();

    let mut rows = Vec::with_capacity(ModelKind::ALL.len());
    for kind in ModelKind::ALL {
        let summary = match kind {
            ModelKind::Unigram | ModelKind::Bigram | ModelKind::Trigram => {
                let order = kind.ngram_order().expect("statistical model has an order");
                let scorer =
                    StatisticalScorer::for_ngrams(corpus, stopwords, order, config.clone())?;
                evaluator.evaluate(&scorer)?
            }
            ModelKind::PosTagger => {
                let scorer = StatisticalScorer::for_all_ngrams(
                    corpus,
                    stopwords,
                    config.max_ngram,
                    config.clone(),
                )?
                .with_tagger(&tagger);
                evaluator.evaluate(&scorer)?
            }
            ModelKind::Rake => {
                let scorer = RakeScorer::new(corpus, stopwords);
                evaluator.evaluate(&scorer)?
            }
        };
        log::info!(
            "{}: average {:.6}, best {:.6}, worst {:.6}",
            kind,
            summary.average,
            summary.best,
            summary.worst
        );
        rows.push((kind, summary));
    }
    Ok(rows)
}
