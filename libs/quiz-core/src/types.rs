//! Core types for extracted quiz questions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Option letter to option text, kept in document order.
///
/// Re-inserting a letter replaces its text but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(IndexMap<String, String>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text for `letter`. Returns the previous text, if any.
    pub fn insert(&mut self, letter: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(letter.into(), text.into())
    }

    pub fn get(&self, letter: &str) -> Option<&str> {
        self.0.get(letter).map(String::as_str)
    }

    /// Iterate `(letter, text)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(letter, text)| (letter.into(), text.into()))
                .collect(),
        )
    }
}

/// A question extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Ordinal from the header row. Not required to be unique in the source.
    pub number: u64,
    pub text: String,
    pub options: Options,
    /// Uppercase option letter, or empty when no answer row was found.
    pub answer: String,
    pub marks: u32,
}

impl Question {
    /// Create a question with no options, no answer and zero marks.
    pub fn new(number: u64, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
            options: Options::new(),
            answer: String::new(),
            marks: 0,
        }
    }

    pub fn has_answer(&self) -> bool {
        !self.answer.is_empty()
    }

    /// Text of the option named by the answer.
    pub fn correct_option(&self) -> Option<&str> {
        if !self.has_answer() {
            return None;
        }
        self.options.get(&self.answer)
    }

    /// Has options, an answer naming one of them, and a non-zero weight.
    pub fn is_complete(&self) -> bool {
        !self.options.is_empty() && self.correct_option().is_some() && self.marks > 0
    }
}

/// Aggregate counts over an extracted question set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub questions: usize,
    pub complete: usize,
    pub unanswered: usize,
    pub total_marks: u64,
}

impl QuizSummary {
    pub fn from_questions(questions: &[Question]) -> Self {
        questions.iter().fold(Self::default(), |mut summary, q| {
            summary.questions += 1;
            if q.is_complete() {
                summary.complete += 1;
            }
            if !q.has_answer() {
                summary.unanswered += 1;
            }
            summary.total_marks += u64::from(q.marks);
            summary
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Question {
        let mut q = Question::new(1, "What is 2+2?");
        q.options.insert("A", "3");
        q.options.insert("B", "4");
        q.answer = "B".to_string();
        q.marks = 2;
        q
    }

    #[test]
    fn options_overwrite_keeps_position() {
        let mut options = Options::new();
        options.insert("A", "first");
        options.insert("B", "second");
        let previous = options.insert("A", "replaced");

        assert_eq!(previous.as_deref(), Some("first"));
        assert_eq!(
            options.iter().collect::<Vec<_>>(),
            vec![("A", "replaced"), ("B", "second")]
        );
    }

    #[test]
    fn new_question_is_empty() {
        let q = Question::new(7, "Prompt");
        assert!(q.options.is_empty());
        assert_eq!(q.answer, "");
        assert_eq!(q.marks, 0);
        assert!(!q.has_answer());
    }

    #[test]
    fn correct_option_resolves_answer() {
        assert_eq!(sample().correct_option(), Some("4"));

        let mut q = sample();
        q.answer = "D".to_string();
        assert_eq!(q.correct_option(), None);
        assert!(!q.is_complete());
    }

    #[test]
    fn complete_requires_marks() {
        let mut q = sample();
        assert!(q.is_complete());
        q.marks = 0;
        assert!(!q.is_complete());
    }

    #[test]
    fn options_serialize_in_document_order() {
        let options: Options = [("C", "x"), ("A", "y")].into_iter().collect();
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"C":"x","A":"y"}"#);

        let back: Options = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn summary_counts() {
        let mut unanswered = Question::new(2, "Open");
        unanswered.marks = 3;
        let summary = QuizSummary::from_questions(&[sample(), unanswered]);

        assert_eq!(
            summary,
            QuizSummary {
                questions: 2,
                complete: 1,
                unanswered: 1,
                total_marks: 5,
            }
        );
    }
}
