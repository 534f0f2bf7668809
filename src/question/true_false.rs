//! True/false question payload
//!
//! A true/false question carries a prompt and a single bit: whether "True"
//! is the correct option. Representing it as a `bool` rather than two answer
//! rows with mutually exclusive flags makes the exactly-one-correct
//! invariant structural.

use garde::Validate;
use serde::{Deserialize, Serialize};

/// Payload of a true/false question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TrueFalseQuestion {
    /// The question prompt shown to the learner
    #[garde(length(chars, min = 1, max = crate::constants::question::MAX_TEXT_LENGTH))]
    pub text: String,
    /// `true` if "True" is the correct option, `false` if "False" is
    #[garde(skip)]
    pub answer: bool,
}
