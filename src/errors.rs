//! Error types for keyrank
//!
//! All fallible operations in the library return [`Result`]. Configuration
//! problems (missing files) and data problems (corpus mismatches, zero
//! document frequency) are surfaced as distinct variants so callers can
//! abort with a precise message instead of propagating NaN scores.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, KeyrankError>;

/// Main error type for keyrank
#[derive(Error, Debug)]
pub enum KeyrankError {
    /// File or directory could not be read (missing stopword file,
    /// unreadable corpus directory, ...)
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus holds no documents; IDF is undefined
    #[error("Empty corpus: {message}")]
    EmptyCorpus { message: String },

    /// Document and reference-set counts differ
    #[error("Corpus mismatch: {documents} documents but {references} reference keyword sets")]
    CorpusMismatch { documents: usize, references: usize },

    /// A phrase reached the scorer without occurring in any corpus document
    #[error("Zero document frequency for phrase {phrase:?}")]
    ZeroDocumentFrequency { phrase: String },

    /// A phrase reached the scorer without occurring in its own document
    #[error("Phrase {phrase:?} not found in its source document")]
    PhraseNotInDocument { phrase: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl KeyrankError {
    /// Create an I/O error carrying the offending path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an empty corpus error
    pub fn empty_corpus(message: impl Into<String>) -> Self {
        Self::EmptyCorpus {
            message: message.into(),
        }
    }

    /// Create a corpus mismatch error
    pub fn corpus_mismatch(documents: usize, references: usize) -> Self {
        Self::CorpusMismatch {
            documents,
            references,
        }
    }

    /// Create a zero document frequency error
    pub fn zero_document_frequency(phrase: impl Into<String>) -> Self {
        Self::ZeroDocumentFrequency {
            phrase: phrase.into(),
        }
    }

    /// Create a phrase-not-in-document error
    pub fn phrase_not_in_document(phrase: impl Into<String>) -> Self {
        Self::PhraseNotInDocument {
            phrase: phrase.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Check whether this error is a data error (as opposed to a
    /// configuration or I/O problem)
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyCorpus { .. }
                | Self::CorpusMismatch { .. }
                | Self::ZeroDocumentFrequency { .. }
                | Self::PhraseNotInDocument { .. }
        )
    }
}
