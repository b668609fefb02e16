//! # keyrank
//!
//! Key phrase extraction from short documents, benchmarked against
//! human-assigned reference keywords.
//!
//! Two independent ranking algorithms are provided:
//!
//! - **Statistical**: a `tf * idf * relpos` composite over n-gram
//!   candidates, with an optional POS boost for all-noun/adjective
//!   phrases.
//! - **RAKE**: a degree-based scorer over stopword-delimited content
//!   phrases.
//!
//! The [`eval`] module runs either scorer across a corpus, compares each
//! document's top-K phrases with its reference keyword set, and
//! aggregates precision (average, best, worst) into a fixed-width report.
//!
//! All scoring is deterministic: the corpus is ordered lexicographically
//! by filename, score tables preserve insertion order, and ranking ties
//! break on that order.

pub mod corpus;
pub mod errors;
pub mod eval;
pub mod nlp;
pub mod rank;
pub mod scoring;
pub mod types;

// Re-export commonly used types
pub use corpus::{Corpus, Document, ReferenceSet};
pub use errors::{KeyrankError, Result};
pub use eval::report::write_report;
pub use eval::{run_all_models, Evaluator};
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tagger::{HeuristicTagger, PosTag, PosTagger};
pub use nlp::tokenizer::NgramGenerator;
pub use rank::top_k;
pub use scoring::rake::RakeScorer;
pub use scoring::statistical::{StatisticalScorer, POS_BOOST};
pub use scoring::{KeyphraseScorer, ScoreTable};
pub use types::{ExtractionConfig, ModelKind, PrecisionSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
