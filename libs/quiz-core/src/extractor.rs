//! Table-row extractor for quiz documents.
//!
//! # Format
//! ```text
//! | 1 | What is 2+2? |
//! | A. | 3 |
//! | B. | 4 |
//! | Answer | optionb |
//! | Marks: | 2 |
//! ```
//!
//! Each trimmed line is tried against the header, option, answer and marks
//! shapes in that order. The first shape that matches wins; anything else is
//! skipped without error.

use crate::types::Question;
use regex::Regex;
use std::sync::LazyLock;

static HEADER_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|\s*(\d+)\s*\|\s*([^|]*?)\s*\|$").expect("header pattern"));

static OPTION_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|\s*([A-Da-d])\.?\s*\|\s*([^|]*?)\s*\|$").expect("option pattern"));

static ANSWER_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|\s*Answer\s*\|\s*(?i:option)\s*([A-Da-d])\s*\|$").expect("answer pattern")
});

static MARKS_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|\s*Marks:\s*\|\s*(\d+)\s*\|$").expect("marks pattern"));

/// How a single row was recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Header { number: u64, text: &'a str },
    Option { letter: char, text: &'a str },
    Answer(char),
    Marks(u32),
    Ignored,
}

/// Classify one line. The line is trimmed before matching.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim();

    if let Some(caps) = HEADER_ROW.captures(line) {
        // Zero, overflowing numbers and blank prompts make the row unmatched.
        let text = caps.get(2).map_or("", |m| m.as_str().trim());
        return match caps[1].parse::<u64>() {
            Ok(number) if number > 0 && !text.is_empty() => LineKind::Header { number, text },
            _ => LineKind::Ignored,
        };
    }

    if let Some(caps) = OPTION_ROW.captures(line) {
        let letter = first_upper(&caps[1]);
        let text = caps.get(2).map_or("", |m| m.as_str().trim());
        return LineKind::Option { letter, text };
    }

    if let Some(caps) = ANSWER_ROW.captures(line) {
        return LineKind::Answer(first_upper(&caps[1]));
    }

    if let Some(caps) = MARKS_ROW.captures(line) {
        return match caps[1].parse::<u32>() {
            Ok(marks) => LineKind::Marks(marks),
            Err(_) => LineKind::Ignored,
        };
    }

    LineKind::Ignored
}

fn first_upper(letter: &str) -> char {
    letter
        .chars()
        .next()
        .map_or('?', |c| c.to_ascii_uppercase())
}

/// Extract questions from the full text of a document, in source order.
///
/// Rows that belong to a question but appear before any header are dropped.
/// Questions are kept even when options, answer or marks are missing.
pub fn extract(full_text: &str) -> Vec<Question> {
    let mut extractor = Extractor::new();

    for line in full_text.split('\n') {
        extractor.process_line(line);
    }

    extractor.finalize()
}

struct Extractor {
    current: Option<Question>,
    sealed: Vec<Question>,
    lines: usize,
    orphans: usize,
}

impl Extractor {
    fn new() -> Self {
        Self {
            current: None,
            sealed: Vec::new(),
            lines: 0,
            orphans: 0,
        }
    }

    fn process_line(&mut self, line: &str) {
        self.lines += 1;

        match classify_line(line) {
            LineKind::Header { number, text } => {
                tracing::trace!(line = self.lines, number, "question header");
                self.seal();
                self.current = Some(Question::new(number, text));
            }
            LineKind::Option { letter, text } => match self.current.as_mut() {
                Some(question) => {
                    tracing::trace!(line = self.lines, %letter, "option row");
                    question.options.insert(letter.to_string(), text);
                }
                None => self.orphans += 1,
            },
            LineKind::Answer(letter) => match self.current.as_mut() {
                Some(question) => {
                    tracing::trace!(line = self.lines, %letter, "answer row");
                    question.answer = letter.to_string();
                }
                None => self.orphans += 1,
            },
            LineKind::Marks(marks) => match self.current.as_mut() {
                Some(question) => {
                    tracing::trace!(line = self.lines, marks, "marks row");
                    question.marks = marks;
                }
                None => self.orphans += 1,
            },
            LineKind::Ignored => {}
        }
    }

    fn seal(&mut self) {
        if let Some(question) = self.current.take() {
            self.sealed.push(question);
        }
    }

    fn finalize(mut self) -> Vec<Question> {
        self.seal();

        tracing::debug!(
            lines = self.lines,
            questions = self.sealed.len(),
            orphans = self.orphans,
            "extraction finished"
        );

        self.sealed
    }
}
