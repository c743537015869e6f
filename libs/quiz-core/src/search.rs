//! Case-insensitive containment search over extracted questions.

use crate::types::Question;

/// Whether `question` contains `query` in its text or any option text.
///
/// An empty query matches nothing. The query is case-folded but otherwise
/// used as given, surrounding whitespace included.
pub fn matches(question: &Question, query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    let needle = query.to_lowercase();
    contains_folded(question, &needle)
}

fn contains_folded(question: &Question, needle: &str) -> bool {
    question.text.to_lowercase().contains(needle)
        || question
            .options
            .values()
            .any(|text| text.to_lowercase().contains(needle))
}

/// Borrowing variant of [`search`].
pub fn search_refs<'a>(questions: &'a [Question], query: &str) -> Vec<&'a Question> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    questions
        .iter()
        .filter(|q| contains_folded(q, &needle))
        .collect()
}

/// Filter `questions` to those matching `query`, preserving order.
///
/// An empty query clears the result rather than returning everything.
pub fn search(questions: &[Question], query: &str) -> Vec<Question> {
    search_refs(questions, query).into_iter().cloned().collect()
}
