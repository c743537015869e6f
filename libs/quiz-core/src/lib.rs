//! Core quiz extraction library.
//!
//! Provides:
//! - Row extractor turning table-formatted document text into questions
//! - Containment search over extracted questions
//! - Document text sources (filesystem, in-memory)
//! - Shared types (Question, Options, QuizSummary)

pub mod error;
pub mod extractor;
pub mod search;
pub mod source;
pub mod types;

pub use error::{Result, SourceError};
pub use extractor::{classify_line, extract, LineKind};
pub use search::{matches, search, search_refs};
pub use source::{extract_from, DocumentTextSource, FileSource, MemorySource};
pub use types::{Options, Question, QuizSummary};
