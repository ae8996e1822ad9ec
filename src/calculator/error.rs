//! Evaluation failures.
//!
//! Every variant is a problem with the input; nothing here is transient.
//! The `Display` text of each variant is stable and meant to be shown as is.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Mismatched brackets")]
    MismatchedBrackets,

    #[error("Leading operator")]
    LeadingOperator,

    #[error("Trailing operator")]
    TrailingOperator,

    #[error("Duplicate operators")]
    DuplicateOperators,

    #[error("Malformed number: {0}")]
    MalformedNumber(String),

    /// An operator follows another operator and is not a sign.
    #[error("Missing operand")]
    MissingOperand,

    /// Two operands sit next to each other, e.g. `(2)3`.
    #[error("Missing operator")]
    MissingOperator,

    #[error("Too many nested brackets (limit is {limit})")]
    NestingTooDeep { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_stable() {
        assert_eq!(EvaluationError::EmptyInput.to_string(), "Empty input");
        assert_eq!(
            EvaluationError::MismatchedBrackets.to_string(),
            "Mismatched brackets"
        );
        assert_eq!(EvaluationError::LeadingOperator.to_string(), "Leading operator");
        assert_eq!(
            EvaluationError::TrailingOperator.to_string(),
            "Trailing operator"
        );
        assert_eq!(
            EvaluationError::DuplicateOperators.to_string(),
            "Duplicate operators"
        );
        assert_eq!(
            EvaluationError::MalformedNumber("1.2.3".to_string()).to_string(),
            "Malformed number: 1.2.3"
        );
    }
}
