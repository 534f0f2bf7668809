//! Numerical question payload
//!
//! A numerical question accepts any number inside an inclusive range,
//! optionally widened by an error margin. The bounds and margin are emitted
//! into GIFT as-is; they are never escaped.

use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Validates a numeric range: finite bounds, `min < max`, positive margin
fn validate_range(range: &NumericRange) -> garde::Result {
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(garde::Error::new("range bounds must be finite numbers"));
    }
    if range.min >= range.max {
        return Err(garde::Error::new(format!(
            "minimum {} must be less than maximum {}",
            range.min, range.max
        )));
    }
    match range.error_margin {
        Some(margin) if !margin.is_finite() || margin <= 0.0 => Err(garde::Error::new(
            "error margin must be a positive number when present",
        )),
        _ => Ok(()),
    }
}

/// Payload of a numerical question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NumericalQuestion {
    /// The question prompt shown to the learner
    #[garde(length(chars, min = 1, max = crate::constants::question::MAX_TEXT_LENGTH))]
    pub text: String,
    /// The accepted numeric range
    #[garde(custom(|range, _| validate_range(range)))]
    pub range: NumericRange,
}

/// An inclusive numeric range with an optional error margin
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    /// Lower bound of accepted answers
    pub min: f64,
    /// Upper bound of accepted answers
    pub max: f64,
    /// Extra tolerance around the bounds, strictly positive when present
    #[serde(default)]
    pub error_margin: Option<f64>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn create_test_question() -> NumericalQuestion {
        NumericalQuestion {
            text: "How many planets are in the solar system?".to_string(),
            range: NumericRange {
                min: 5.0,
                max: 10.0,
                error_margin: None,
            },
        }
    }

    #[test]
    fn test_valid_question() {
        assert!(create_test_question().validate().is_ok());
    }

    #[test]
    fn test_valid_with_margin() {
        let mut question = create_test_question();
        question.range.error_margin = Some(0.5);
        assert!(question.validate().is_ok());
    }

    #[test]
    fn test_min_equal_max_rejected() {
        let mut question = create_test_question();
        question.range.max = question.range.min;
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_min_above_max_rejected() {
        let mut question = create_test_question();
        question.range.min = 20.0;
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_non_finite_bound_rejected() {
        let mut question = create_test_question();
        question.range.max = f64::INFINITY;
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_zero_margin_rejected() {
        let mut question = create_test_question();
        question.range.error_margin = Some(0.0);
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_absent_margin_not_serialized() {
        let question = create_test_question();
        let json = serde_json::to_string(&question.range).unwrap();
        assert!(!json.contains("error_margin"));
    }
}
