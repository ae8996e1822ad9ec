//! Calculator module for evaluating arithmetic expressions.
//!
//! This module provides functionality to:
//! - Validate, desugar, parse and evaluate expressions
//! - Format results for display and the clipboard
//! - Filter typed or pasted text down to the accepted characters
//! - Copy results to and paste expressions from the clipboard

mod clipboard;
mod error;
mod evaluation;
mod expr;
mod input;
mod lexer;
mod operator;
mod parser;
mod sugar;
mod validation;

pub use clipboard::{copy_to_clipboard, paste_from_clipboard};
pub use error::EvaluationError;
pub use evaluation::{
    CalcResult, DEFAULT_PRECISION, DisplayOptions, evaluate, evaluate_expression, format_result,
    parse_expression,
};
pub use expr::Expr;
pub use input::sanitize;
pub use operator::Operator;
pub use parser::MAX_NESTING;
