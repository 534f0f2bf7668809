//! Multiple choice question payload
//!
//! Shared by the single-answer (`MCQ`) and multiple-answer (`MCQ_MA`)
//! question kinds: both carry a prompt and an ordered list of answer options,
//! each option marked correct or incorrect and optionally carrying feedback
//! shown to the learner. The two kinds differ only in how the host form
//! collects the correct flags (radio buttons versus checkboxes).

use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Validates that at least one answer option is marked correct
fn validate_has_correct(answers: &[AnswerChoice]) -> garde::Result {
    if answers.iter().any(|a| a.correct) {
        Ok(())
    } else {
        Err(garde::Error::new(
            "at least one answer must be marked correct",
        ))
    }
}

/// Payload of a multiple choice question
///
/// The order of `answers` is preserved into the GIFT output, so the host's
/// insertion order is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ChoiceQuestion {
    /// The question prompt shown to the learner
    #[garde(length(chars, min = 1, max = crate::constants::question::MAX_TEXT_LENGTH))]
    pub text: String,
    /// The ordered answer options, at least one of them correct
    #[garde(
        length(min = crate::constants::choice::MIN_ANSWER_COUNT, max = crate::constants::choice::MAX_ANSWER_COUNT),
        custom(|answers, _| validate_has_correct(answers)),
        dive
    )]
    pub answers: Vec<AnswerChoice>,
}

/// A single answer option in a multiple choice question
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AnswerChoice {
    /// The answer text
    #[garde(length(chars, min = 1, max = crate::constants::answer_text::MAX_LENGTH))]
    pub text: String,
    /// Whether this option is a correct answer
    #[garde(skip)]
    pub correct: bool,
    /// Feedback shown when the learner picks this option, if any
    #[garde(inner(length(chars, max = crate::constants::choice::MAX_FEEDBACK_LENGTH)))]
    pub feedback: Option<String>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn create_test_question() -> ChoiceQuestion {
        ChoiceQuestion {
            text: "What is 2+2?".to_string(),
            answers: vec![
                AnswerChoice {
                    text: "3".to_string(),
                    correct: false,
                    feedback: None,
                },
                AnswerChoice {
                    text: "4".to_string(),
                    correct: true,
                    feedback: Some("Correct!".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_valid_question() {
        assert!(create_test_question().validate().is_ok());
    }

    #[test]
    fn test_empty_text_rejected() {
        let mut question = create_test_question();
        question.text = String::new();
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_text_too_long_rejected() {
        let mut question = create_test_question();
        question.text = "a".repeat(crate::constants::question::MAX_TEXT_LENGTH + 1);
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_too_few_answers_rejected() {
        let mut question = create_test_question();
        question.answers.truncate(1);
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_no_correct_answer_rejected() {
        let mut question = create_test_question();
        for answer in &mut question.answers {
            answer.correct = false;
        }
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_multiple_correct_answers_allowed() {
        let mut question = create_test_question();
        for answer in &mut question.answers {
            answer.correct = true;
        }
        assert!(question.validate().is_ok());
    }

    #[test]
    fn test_empty_answer_text_rejected() {
        let mut question = create_test_question();
        question.answers[0].text = String::new();
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_absent_feedback_not_serialized() {
        let answer = AnswerChoice {
            text: "3".to_string(),
            correct: false,
            feedback: None,
        };
        let json = serde_json::to_string(&answer).unwrap();
        assert!(!json.contains("feedback"));
    }
}
