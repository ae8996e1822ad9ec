//! Up-front checks on a whitespace-free expression.
//!
//! Checks run in a fixed order and the first one that fails wins.

use super::error::EvaluationError;
use super::operator::Operator;

/// Validate an expression that has already had its whitespace removed.
pub fn validate(expr: &str) -> Result<(), EvaluationError> {
    let (Some(first), Some(last)) = (expr.chars().next(), expr.chars().last()) else {
        return Err(EvaluationError::EmptyInput);
    };

    if count(expr, '(') != count(expr, ')') {
        return Err(EvaluationError::MismatchedBrackets);
    }

    if Operator::is_symbol(first) {
        return Err(EvaluationError::LeadingOperator);
    }

    if Operator::is_symbol(last) {
        return Err(EvaluationError::TrailingOperator);
    }

    if has_repeated_operator(expr) {
        return Err(EvaluationError::DuplicateOperators);
    }

    Ok(())
}

fn count(expr: &str, needle: char) -> usize {
    expr.chars().filter(|&c| c == needle).count()
}

/// Check for the same operator symbol twice in a row, e.g. `**`.
fn has_repeated_operator(expr: &str) -> bool {
    let chars: Vec<char> = expr.chars().collect();
    chars
        .windows(2)
        .any(|pair| pair[0] == pair[1] && Operator::is_symbol(pair[0]))
}
