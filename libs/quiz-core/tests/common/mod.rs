//! Fixture builders for quiz document text.

/// A table row with the given cells.
pub fn row(cells: &[&str]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// A complete question block: header, options, answer and marks rows.
///
/// # Arguments
/// * `number` - Header number
/// * `text` - Prompt text
/// * `options` - Option rows as `(letter, text)`
/// * `answer` - Lowercase answer letter, if any
/// * `marks` - Marks row value, if any
pub fn question_block(
    number: u64,
    text: &str,
    options: &[(&str, &str)],
    answer: Option<char>,
    marks: Option<u32>,
) -> String {
    let mut lines = vec![row(&[&number.to_string(), text])];
    for (letter, option) in options {
        lines.push(row(&[&format!("{}.", letter), option]));
    }
    if let Some(letter) = answer {
        lines.push(row(&["Answer", &format!("option{}", letter)]));
    }
    if let Some(marks) = marks {
        lines.push(row(&["Marks:", &marks.to_string()]));
    }
    lines.join("\n")
}

/// A document of `count` numbered questions, each with four options,
/// separated by unrelated prose.
pub fn sample_document(count: u64) -> String {
    (1..=count)
        .map(|n| {
            let options = ["Alpha", "Bravo", "Charlie", "Delta"].map(|word| format!("{} {}", word, n));
            let block = question_block(
                n,
                &format!("Question {}?", n),
                &[
                    ("A", options[0].as_str()),
                    ("B", options[1].as_str()),
                    ("C", options[2].as_str()),
                    ("D", options[3].as_str()),
                ],
                Some('c'),
                Some(1),
            );
            format!("Page {}\n{}\n----", n, block)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
