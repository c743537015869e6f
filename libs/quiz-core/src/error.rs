//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using SourceError.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors raised while obtaining document text.
///
/// Extraction itself never fails: rows that do not match any known shape
/// are skipped, and a document without questions yields an empty list.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("document {id} unavailable: {reason}")]
    Unavailable { id: String, reason: String },
}

impl SourceError {
    pub(crate) fn unavailable(id: impl Into<String>, reason: impl ToString) -> Self {
        Self::Unavailable {
            id: id.into(),
            reason: reason.to_string(),
        }
    }

    /// Identifier of the document that could not be read.
    pub fn id(&self) -> &str {
        match self {
            Self::Unavailable { id, .. } => id,
        }
    }
}
