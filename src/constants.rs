//! Configuration constants for the quiz builder
//!
//! This module contains the limits and constraints applied to question
//! content before it is accepted into a quiz. They mirror the bounds the
//! host form enforces, so a question that validates here always has a
//! well-defined GIFT rendering.

/// Constants shared by every question kind
pub mod question {
    /// Maximum length of a question prompt in characters
    pub const MAX_TEXT_LENGTH: usize = 200;
}

/// Multiple choice (single and multiple answer) configuration constants
pub mod choice {
    /// Minimum number of answer options for a multiple choice question
    pub const MIN_ANSWER_COUNT: usize = 2;
    /// Maximum number of answer options for a multiple choice question
    pub const MAX_ANSWER_COUNT: usize = 26;
    /// Maximum length of per-answer feedback in characters
    pub const MAX_FEEDBACK_LENGTH: usize = 500;
}

/// Matching question configuration constants
pub mod matching {
    /// Minimum number of subquestion/answer pairs in a matching question
    pub const MIN_PAIR_COUNT: usize = 2;
    /// Maximum number of subquestion/answer pairs in a matching question
    pub const MAX_PAIR_COUNT: usize = 50;
}

/// Short answer question configuration constants
pub mod short_answer {
    /// Minimum number of accepted answers for a short answer question
    pub const MIN_ACCEPTED_COUNT: usize = 1;
    /// Maximum number of accepted answers for a short answer question
    pub const MAX_ACCEPTED_COUNT: usize = 16;
    /// Delimiter between accepted answers in the host form's single input
    pub const ANSWER_DELIMITER: &str = "||";
}

/// Answer text configuration constants
pub mod answer_text {
    /// Maximum length of answer text in characters
    pub const MAX_LENGTH: usize = 200;
}
