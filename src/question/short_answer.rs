//! Short answer question payload
//!
//! A short answer question accepts one or more exact answer texts. Host
//! forms typically collect them as a single `||`-delimited input, which
//! [`ShortAnswerQuestion::from_delimited`] splits apart.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::constants::short_answer::ANSWER_DELIMITER;

/// Payload of a short answer question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ShortAnswerQuestion {
    /// The question prompt shown to the learner
    #[garde(length(chars, min = 1, max = crate::constants::question::MAX_TEXT_LENGTH))]
    pub text: String,
    /// The ordered accepted answer texts, at least one
    #[garde(
        length(min = crate::constants::short_answer::MIN_ACCEPTED_COUNT, max = crate::constants::short_answer::MAX_ACCEPTED_COUNT),
        inner(length(chars, min = 1, max = crate::constants::answer_text::MAX_LENGTH))
    )]
    pub accepted_answers: Vec<String>,
}

impl ShortAnswerQuestion {
    /// Builds a short answer question from a `||`-delimited input string
    ///
    /// Each piece is trimmed; empty pieces (such as those produced by a
    /// trailing delimiter) are discarded. The result still needs to pass
    /// `validate()`: an input with no non-empty pieces yields a question
    /// with no accepted answers, which validation rejects.
    pub fn from_delimited(text: impl Into<String>, answers: &str) -> Self {
        Self {
            text: text.into(),
            accepted_answers: answers
                .split(ANSWER_DELIMITER)
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}
