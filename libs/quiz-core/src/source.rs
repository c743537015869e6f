//! Document text sources.
//!
//! Extraction only needs the full text of a document. Where that text comes
//! from is behind [`DocumentTextSource`].

use crate::error::{Result, SourceError};
use crate::extractor::extract;
use crate::types::Question;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const UTF8_BOM: &str = "\u{feff}";

/// Produces the complete text of a document.
pub trait DocumentTextSource {
    fn read_text(&self, id: &str) -> Result<String>;
}

/// Reads documents from the filesystem, optionally relative to a root.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    root: Option<PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Path a document id resolves to.
    pub fn resolve(&self, id: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(id),
            None => Path::new(id).to_path_buf(),
        }
    }
}

impl DocumentTextSource for FileSource {
    fn read_text(&self, id: &str) -> Result<String> {
        let path = self.resolve(id);
        let bytes = fs::read(&path)
            .map_err(|e| SourceError::unavailable(id, format!("{}: {}", path.display(), e)))?;
        let text = String::from_utf8(bytes).map_err(|e| SourceError::unavailable(id, e))?;

        Ok(match text.strip_prefix(UTF8_BOM) {
            Some(rest) => rest.to_string(),
            None => text,
        })
    }
}

/// In-memory documents keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(id.into(), text.into());
    }
}

impl DocumentTextSource for MemorySource {
    fn read_text(&self, id: &str) -> Result<String> {
        self.documents
            .get(id)
            .cloned()
            .ok_or_else(|| SourceError::unavailable(id, "no such document"))
    }
}

/// Read a document once and extract its questions.
///
/// A read failure aborts before any extraction happens.
pub fn extract_from<S: DocumentTextSource + ?Sized>(source: &S, id: &str) -> Result<Vec<Question>> {
    let text = source.read_text(id)?;
    tracing::debug!(id, bytes = text.len(), "document loaded");
    Ok(extract(&text))
}
