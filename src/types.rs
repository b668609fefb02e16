//! Core types for keyrank
//!
//! Configuration, model identifiers, and the precision aggregate returned
//! by the evaluator.

use crate::errors::{KeyrankError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for extraction and evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Number of keywords selected per document
    pub top_k: usize,
    /// Highest n-gram order generated (the POS-filtered model pools orders
    /// `1..=max_ngram`)
    pub max_ngram: usize,
    /// Whether the POS-filtered model multiplies scores of all-noun/adjective
    /// phrases by [`POS_BOOST`](crate::scoring::statistical::POS_BOOST).
    ///
    /// This is an explicit toggle, not derived from the model name.
    #[serde(default = "default_apply_pos_boost")]
    pub apply_pos_boost: bool,
}

fn default_apply_pos_boost() -> bool {
    true
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            max_ngram: 3,
            apply_pos_boost: true,
        }
    }
}

impl ExtractionConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(KeyrankError::invalid_config("top_k must be > 0"));
        }
        if self.max_ngram == 0 {
            return Err(KeyrankError::invalid_config("max_ngram must be > 0"));
        }
        Ok(())
    }

    /// Builder method: set the number of keywords per document
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Builder method: set the highest n-gram order
    pub fn with_max_ngram(mut self, max_ngram: usize) -> Self {
        self.max_ngram = max_ngram;
        self
    }

    /// Builder method: set the POS boost toggle
    pub fn with_pos_boost(mut self, apply: bool) -> Self {
        self.apply_pos_boost = apply;
        self
    }

    /// Parse a config from JSON, then validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| KeyrankError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| KeyrankError::invalid_config(e.to_string()))
    }
}

// ============================================================================
// Model identifiers
// ============================================================================

/// The five ranking configurations the evaluation driver runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    /// Statistical scorer over 1-grams
    Unigram,
    /// Statistical scorer over 2-grams
    Bigram,
    /// Statistical scorer over 3-grams
    Trigram,
    /// Statistical scorer over pooled 1..=3-grams with the POS boost
    PosTagger,
    /// Degree scorer over stopword-delimited content phrases
    Rake,
}

impl ModelKind {
    /// All models in report order
    pub const ALL: [ModelKind; 5] = [
        ModelKind::Unigram,
        ModelKind::Bigram,
        ModelKind::Trigram,
        ModelKind::PosTagger,
        ModelKind::Rake,
    ];

    /// Report label for this model
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Unigram => "Unigram",
            ModelKind::Bigram => "Bigram",
            ModelKind::Trigram => "Trigram",
            ModelKind::PosTagger => "POSTagger",
            ModelKind::Rake => "RAKE",
        }
    }

    /// The single n-gram order for the plain statistical models
    pub fn ngram_order(&self) -> Option<usize> {
        match self {
            ModelKind::Unigram => Some(1),
            ModelKind::Bigram => Some(2),
            ModelKind::Trigram => Some(3),
            ModelKind::PosTagger | ModelKind::Rake => None,
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Precision aggregate
// ============================================================================

/// Precision statistics aggregated over one corpus pass.
///
/// `best` and `worst` are independent max/min reductions over all
/// per-document precisions; `average` is their arithmetic mean. Immutable
/// once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecisionSummary {
    /// Mean per-document precision
    pub average: f64,
    /// Highest per-document precision
    pub best: f64,
    /// Lowest per-document precision
    pub worst: f64,
}

impl PrecisionSummary {
    /// Fold a slice of per-document precisions into a summary.
    ///
    /// `best` starts at 0.0 and `worst` at 1.0; both are updated by strict
    /// max/min for every document, so a single mid-range precision moves
    /// both bounds.
    pub fn from_precisions(precisions: &[f64]) -> Self {
        let total: f64 = precisions.iter().sum();
        let best = precisions.iter().copied().fold(0.0_f64, f64::max);
        let worst = precisions.iter().copied().fold(1.0_f64, f64::min);
        Self {
            average: total / precisions.len() as f64,
            best,
            worst,
        }
    }
}
