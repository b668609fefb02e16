//! Corpus and reference keyword loading
//!
//! A corpus is a directory of plain-text documents filtered by extension,
//! ordered lexicographically by filename. IDF and per-index reference
//! lookup both depend on that order being stable, so the directory scan
//! sorts by file name. Reference keyword files pair with documents
//! one-to-one in the same order.

use crate::errors::{KeyrankError, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// One source document: raw text, case-preserved, immutable once loaded
#[derive(Debug, Clone)]
pub struct Document {
    /// File name the document was loaded from
    pub name: String,
    /// Raw document text
    pub text: String,
}

impl Document {
    /// Create a document from a name and text
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// An ordered sequence of documents
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Documents in lexicographic filename order
    pub documents: Vec<Document>,
}

impl Corpus {
    /// Build a corpus from pre-loaded documents (order is kept as given)
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Load every `.{extension}` file directly under `dir`, sorted by
    /// file name.
    ///
    /// A missing or unreadable directory is a fatal configuration error.
    pub fn load_dir(dir: impl AsRef<Path>, extension: &str) -> Result<Self> {
        let dir = dir.as_ref();
        let mut documents = Vec::new();
        for path in files_with_extension(dir, extension)? {
            let text = fs::read_to_string(&path).map_err(|e| KeyrankError::io(&path, e))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            documents.push(Document { name, text });
        }
        log::debug!(
            "loaded {} .{} documents from {}",
            documents.len(),
            extension,
            dir.display()
        );
        Ok(Self { documents })
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the corpus is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Per-document reference keyword sets, in corpus order
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    /// One keyword list per document
    pub keywords: Vec<Vec<String>>,
}

impl ReferenceSet {
    /// Build a reference set from pre-parsed keyword lists
    pub fn from_keywords(keywords: Vec<Vec<String>>) -> Self {
        Self { keywords }
    }

    /// Load every `.{extension}` file directly under `dir`, sorted by file
    /// name, parsing each as a keyword list.
    pub fn load_dir(dir: impl AsRef<Path>, extension: &str) -> Result<Self> {
        let dir = dir.as_ref();
        let mut keywords = Vec::new();
        for path in files_with_extension(dir, extension)? {
            let text = fs::read_to_string(&path).map_err(|e| KeyrankError::io(&path, e))?;
            keywords.push(Self::parse(&text));
        }
        log::debug!(
            "loaded {} .{} reference files from {}",
            keywords.len(),
            extension,
            dir.display()
        );
        Ok(Self { keywords })
    }

    /// Parse one annotation file: internal whitespace collapses to single
    /// spaces, then the text splits on `"; "`.
    pub fn parse(text: &str) -> Vec<String> {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        collapsed
            .split("; ")
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Number of reference keyword lists
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Check if the reference set is empty
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// List files under `dir` (non-recursive) with the given extension, sorted
/// by file name.
fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<std::path::PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| KeyrankError::io(dir, e.into()))?;
        let path = entry.into_path();
        if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            paths.push(path);
        }
    }
    Ok(paths)
}
