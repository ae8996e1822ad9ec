//! Expression evaluation and result formatting.
//!
//! [`evaluate`] is the pure core: text in, number or error out.
//! [`evaluate_expression`] wraps it for front ends and produces display
//! and clipboard strings.

use serde::Serialize;
use tracing::debug;

use super::error::EvaluationError;
use super::expr::Expr;
use super::lexer::tokenize;
use super::parser::parse;
use super::sugar::{desugar, strip_whitespace};
use super::validation::validate;

/// Decimal places used when no precision is configured.
pub const DEFAULT_PRECISION: u32 = 3;

/// Evaluate an arithmetic expression.
///
/// Accepts digits, `.`, the operators `^ * / + -`, brackets and whitespace.
/// Fails with the first problem found; never returns a partial result.
pub fn evaluate(text: &str) -> Result<f64, EvaluationError> {
    parse_expression(text).map(|expr| expr.evaluate())
}

/// Validate, desugar and parse an expression without evaluating it.
pub fn parse_expression(text: &str) -> Result<Expr, EvaluationError> {
    let stripped = strip_whitespace(text);
    validate(&stripped)?;

    let normalized = desugar(&stripped);
    let tokens = tokenize(&normalized)?;
    let expr = parse(&tokens)?;

    debug!(%normalized, tree = %expr, "parsed expression");
    Ok(expr)
}

/// How results are rendered for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Decimal places to round to.
    pub precision: u32,
    /// Group the integer part in thousands with `,`.
    pub thousands_separator: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            thousands_separator: false,
        }
    }
}

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalcResult {
    /// Successful calculation with a finite result.
    Success {
        /// The original expression.
        expression: String,
        /// The unrounded value.
        value: f64,
        /// Rounded, formatted for display.
        display_result: String,
        /// Rounded, without separators.
        clipboard_result: String,
    },
    /// The expression was rejected or did not produce a finite number.
    Error {
        /// The original expression.
        expression: String,
        /// Error message to display.
        message: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Success {
                clipboard_result, ..
            } => Some(clipboard_result),
            Self::Error { .. } => None,
        }
    }
}

/// Evaluate an expression and format the outcome for display.
pub fn evaluate_expression(input: &str, options: &DisplayOptions) -> CalcResult {
    let expression = input.trim().to_string();

    let value = match evaluate(&expression) {
        Ok(value) => value,
        Err(err) => {
            debug!(%expression, error = %err, "expression rejected");
            return CalcResult::Error {
                expression,
                message: err.to_string(),
            };
        }
    };

    if value.is_nan() {
        CalcResult::Error {
            expression,
            message: "Not a Number".to_string(),
        }
    } else if value.is_infinite() {
        let msg = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        CalcResult::Error {
            expression,
            message: msg.to_string(),
        }
    } else {
        let clipboard_result = format_result(value, options.precision);
        let display_result = if options.thousands_separator {
            format_with_separators(&clipboard_result)
        } else {
            clipboard_result.clone()
        };

        CalcResult::Success {
            expression,
            value,
            display_result,
            clipboard_result,
        }
    }
}

/// Round to `precision` decimal places and render without a trailing `.0`.
pub fn format_result(value: f64, precision: u32) -> String {
    let scale = 10f64.powi(precision.min(i32::MAX as u32) as i32);
    let scaled = value * scale;
    let rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    };

    // Never print "-0".
    if rounded == 0.0 {
        return "0".to_string();
    }

    // `Display` for f64 prints integral values without a fraction.
    rounded.to_string()
}

/// Insert `,` between thousands in the integer part of a rendered number.
fn format_with_separators(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let grouped: String = grouped.chars().rev().collect();
    format!("{sign}{grouped}{frac_part}")
}
