//! Question kinds and the question model
//!
//! This module contains the different question kinds supported by the quiz
//! builder. Each kind lives in its own submodule with its payload struct and
//! validation rules; the [`Question`] enum ties them together so that a
//! question can never carry a payload that disagrees with its kind.

use enum_map::Enum;
use garde::Validate;
use serde::{Deserialize, Serialize};

pub mod matching;
pub mod multiple_choice;
pub mod numerical;
pub mod short_answer;
pub mod true_false;

pub use matching::{MatchPair, MatchingQuestion};
pub use multiple_choice::{AnswerChoice, ChoiceQuestion};
pub use numerical::{NumericRange, NumericalQuestion};
pub use short_answer::ShortAnswerQuestion;
pub use true_false::TrueFalseQuestion;

/// A single quiz question of one of the six supported kinds
///
/// This is a tagged union: each variant carries exactly the payload its kind
/// needs, so a mismatched kind/payload pair is unrepresentable. On the wire
/// the enum is internally tagged with `type`, using the discriminator strings
/// host forms exchange (`MCQ`, `MCQ_MA`, `TF`, `MATCHING`, `NUMERICAL`,
/// `SHORT_ANSWER`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, derive_more::From)]
#[serde(tag = "type")]
pub enum Question {
    /// A multiple choice question with a single correct answer
    #[serde(rename = "MCQ")]
    MultipleChoice(#[garde(dive)] ChoiceQuestion),
    /// A multiple choice question where several answers may be correct
    ///
    /// Shares its payload shape with [`Question::MultipleChoice`]; the
    /// distinction only affects the host's input widget and the display name.
    #[serde(rename = "MCQ_MA")]
    #[from(ignore)]
    MultipleAnswers(#[garde(dive)] ChoiceQuestion),
    /// A true/false question
    #[serde(rename = "TF")]
    TrueFalse(#[garde(dive)] TrueFalseQuestion),
    /// A matching question pairing subquestions with answers
    #[serde(rename = "MATCHING")]
    Matching(#[garde(dive)] MatchingQuestion),
    /// A numerical question accepting answers within a range
    #[serde(rename = "NUMERICAL")]
    Numerical(#[garde(dive)] NumericalQuestion),
    /// A short answer question with one or more accepted texts
    #[serde(rename = "SHORT_ANSWER")]
    ShortAnswer(#[garde(dive)] ShortAnswerQuestion),
}

/// The kind of a question without its payload
///
/// Useful for populating kind dropdowns and grouping questions by kind
/// without needing the associated data. The `Display` implementation gives
/// the human-readable name the host shows next to each question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize, derive_more::Display,
)]
pub enum QuestionKind {
    /// Multiple choice, single correct answer
    #[serde(rename = "MCQ")]
    #[display("Multiple Choice (Single Answer)")]
    MultipleChoice,
    /// Multiple choice, several correct answers
    #[serde(rename = "MCQ_MA")]
    #[display("Multiple Choice (Multiple Answers)")]
    MultipleAnswers,
    /// True/false
    #[serde(rename = "TF")]
    #[display("True/False")]
    TrueFalse,
    /// Matching pairs
    #[serde(rename = "MATCHING")]
    #[display("Matching")]
    Matching,
    /// Numerical range
    #[serde(rename = "NUMERICAL")]
    #[display("Numerical Range")]
    Numerical,
    /// Short answer
    #[serde(rename = "SHORT_ANSWER")]
    #[display("Short Answer")]
    ShortAnswer,
}

impl QuestionKind {
    /// Iterates over all question kinds in declaration order
    ///
    /// The order is stable, so hosts can populate a kind dropdown directly
    /// from it.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl Question {
    /// Returns the kind of this question without the associated payload
    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::MultipleChoice(_) => QuestionKind::MultipleChoice,
            Question::MultipleAnswers(_) => QuestionKind::MultipleAnswers,
            Question::TrueFalse(_) => QuestionKind::TrueFalse,
            Question::Matching(_) => QuestionKind::Matching,
            Question::Numerical(_) => QuestionKind::Numerical,
            Question::ShortAnswer(_) => QuestionKind::ShortAnswer,
        }
    }

    /// Returns the prompt text of this question
    pub fn text(&self) -> &str {
        match self {
            Question::MultipleChoice(q) | Question::MultipleAnswers(q) => &q.text,
            Question::TrueFalse(q) => &q.text,
            Question::Matching(q) => &q.text,
            Question::Numerical(q) => &q.text,
            Question::ShortAnswer(q) => &q.text,
        }
    }
}
