//! Matching question payload
//!
//! A matching question presents a list of subquestions, each of which the
//! learner pairs with its answer. The pairs keep their insertion order into
//! the GIFT output.

use garde::Validate;
use serde::{Deserialize, Serialize};

/// Payload of a matching question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MatchingQuestion {
    /// The question prompt shown to the learner
    #[garde(length(chars, min = 1, max = crate::constants::question::MAX_TEXT_LENGTH))]
    pub text: String,
    /// The ordered subquestion/answer pairs
    #[garde(
        length(min = crate::constants::matching::MIN_PAIR_COUNT, max = crate::constants::matching::MAX_PAIR_COUNT),
        dive
    )]
    pub matches: Vec<MatchPair>,
}

/// A single subquestion/answer pair in a matching question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MatchPair {
    /// The subquestion presented on the left-hand side
    #[garde(length(chars, min = 1, max = crate::constants::answer_text::MAX_LENGTH))]
    pub subquestion: String,
    /// The answer it must be paired with
    #[garde(length(chars, min = 1, max = crate::constants::answer_text::MAX_LENGTH))]
    pub answer: String,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn create_test_question() -> MatchingQuestion {
        MatchingQuestion {
            text: "Match each country with its capital.".to_string(),
            matches: vec![
                MatchPair {
                    subquestion: "France".to_string(),
                    answer: "Paris".to_string(),
                },
                MatchPair {
                    subquestion: "Italy".to_string(),
                    answer: "Rome".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_valid_question() {
        assert!(create_test_question().validate().is_ok());
    }

    #[test]
    fn test_too_few_pairs_rejected() {
        let mut question = create_test_question();
        question.matches.truncate(1);
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_empty_subquestion_rejected() {
        let mut question = create_test_question();
        question.matches[0].subquestion = String::new();
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_empty_answer_rejected() {
        let mut question = create_test_question();
        question.matches[1].answer = String::new();
        assert!(question.validate().is_err());
    }
}
