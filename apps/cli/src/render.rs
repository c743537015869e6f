//! Text and JSON rendering of questions and search results.

use crate::config::Format;
use quiz_core::{Question, QuizSummary};
use serde::Serialize;

#[derive(Serialize)]
struct ExtractOutput<'a> {
    questions: &'a [Question],
    summary: QuizSummary,
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    matches: &'a [&'a Question],
}

/// Render one question as an indented block, marking the answer with `*`.
pub fn question_block(question: &Question) -> String {
    let mut out = String::new();
    let marks = match question.marks {
        0 => String::new(),
        1 => "  [1 mark]".to_string(),
        n => format!("  [{} marks]", n),
    };
    out.push_str(&format!("Q{}. {}{}\n", question.number, question.text, marks));

    for (letter, text) in question.options.iter() {
        let marker = if letter == question.answer { '*' } else { ' ' };
        out.push_str(&format!("  {} {}. {}\n", marker, letter, text));
    }

    if question.has_answer() && question.correct_option().is_none() {
        out.push_str(&format!("    answer: {}\n", question.answer));
    }
    out
}

pub fn summary_line(summary: &QuizSummary) -> String {
    format!(
        "{} questions ({} complete, {} unanswered), {} total marks",
        summary.questions, summary.complete, summary.unanswered, summary.total_marks
    )
}

/// Render a full extraction.
pub fn render_extract(questions: &[Question], format: Format) -> anyhow::Result<String> {
    let summary = QuizSummary::from_questions(questions);
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(&ExtractOutput { questions, summary })?),
        Format::Text => {
            let mut out = String::new();
            for question in questions {
                out.push_str(&question_block(question));
                out.push('\n');
            }
            out.push_str(&summary_line(&summary));
            Ok(out)
        }
    }
}

/// Render the matches for one query.
pub fn render_search(query: &str, matches: &[&Question], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string(&SearchOutput { query, matches })?),
        Format::Text => {
            let mut out = format!("{} match(es) for {:?}\n", matches.len(), query);
            for question in matches {
                out.push_str(&question_block(question));
            }
            Ok(out)
        }
    }
}
