//! GIFT serialization
//!
//! This module converts questions into the GIFT text format, the plain-text
//! quiz markup consumed by learning-management systems. GIFT delimits answer
//! blocks with `{}`, marks choices with `=`/`~`, prefixes feedback with `#`,
//! and escapes reserved characters with a backslash.
//!
//! The output is byte-exact: downstream GIFT importers are sensitive to the
//! separator and newline placement, so the formatting rules here must not be
//! reordered or "cleaned up".
//!
//! Serialization trusts its input. Questions are expected to have passed
//! `validate()` before reaching this module; a malformed question is an
//! upstream bug and only trips a debug assertion, not a runtime error.

use garde::Validate;
use itertools::Itertools;

use crate::question::Question;

/// Escapes the GIFT reserved characters in a free-text field
///
/// The reserved characters `\`, `~`, `=`, `#`, `{`, `}` and `:` are each
/// prefixed with a single backslash. The single character-wise pass escapes
/// backslashes "first": a backslash introduced by the escaping itself is
/// never re-escaped.
///
/// Empty input yields an empty string.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '~' | '=' | '#' | '{' | '}' | ':' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Serializes a sequence of questions into one GIFT document
///
/// Each question becomes one block named `::Q<n>::` by its 1-based position.
/// Blocks are separated by a single blank line, with no separator after the
/// last block. An empty slice yields an empty string.
pub fn serialize(questions: &[Question]) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| question_block(question, index))
        .join("\n")
}

/// Serializes a single question into its GIFT block
///
/// The block runs from the `::Q<index+1>::` header through the closing `}`
/// of the answer body and ends with a newline.
pub fn question_block(question: &Question, index: usize) -> String {
    debug_assert!(
        question.validate().is_ok(),
        "question passed to the serializer without validating"
    );

    let mut block = format!("::Q{}:: {}\n", index + 1, escape_text(question.text()));

    match question {
        Question::TrueFalse(q) => {
            // TRUE/FALSE are GIFT reserved words and must never be escaped.
            block.push_str(if q.answer { "{TRUE}\n" } else { "{FALSE}\n" });
        }
        Question::MultipleChoice(q) | Question::MultipleAnswers(q) => {
            block.push_str("{\n");
            for answer in &q.answers {
                block.push(if answer.correct { '=' } else { '~' });
                block.push_str(&escape_text(&answer.text));
                if let Some(feedback) = answer.feedback.as_deref().filter(|f| !f.is_empty()) {
                    block.push_str(" #");
                    block.push_str(&escape_text(feedback));
                }
                block.push('\n');
            }
            block.push_str("}\n");
        }
        Question::Matching(q) => {
            block.push_str("{\n");
            for pair in &q.matches {
                block.push('=');
                block.push_str(&escape_text(&pair.subquestion));
                block.push_str(" -> ");
                block.push_str(&escape_text(&pair.answer));
                block.push('\n');
            }
            block.push_str("}\n");
        }
        Question::Numerical(q) => {
            // Numeric fields are emitted as-is, never escaped.
            block.push_str(&format!("{{#{}..{}", q.range.min, q.range.max));
            if let Some(margin) = q.range.error_margin {
                block.push_str(&format!(":{margin}"));
            }
            block.push_str("}\n");
        }
        Question::ShortAnswer(q) => {
            block.push_str(&format!(
                "{{={}}}\n",
                q.accepted_answers.iter().map(|a| escape_text(a)).join(" OR ")
            ));
        }
    }

    block
}
