//! Splits a normalized expression into tokens.
//!
//! Anything that is not an operator or a bracket belongs to an operand run,
//! and every operand run must be a plain decimal literal.

use super::error::EvaluationError;
use super::operator::Operator;

/// A lexical unit of an expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    LParen,
    RParen,
}

/// Tokenize a whitespace-free expression.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, EvaluationError> {
    let mut tokens = Vec::new();
    let mut run = String::new();

    for c in expr.chars() {
        let token = match c {
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => match Operator::from_symbol(c) {
                Some(op) => Token::Operator(op),
                None => {
                    run.push(c);
                    continue;
                }
            },
        };

        if !run.is_empty() {
            tokens.push(Token::Number(parse_literal(&run)?));
            run.clear();
        }
        tokens.push(token);
    }

    if !run.is_empty() {
        tokens.push(Token::Number(parse_literal(&run)?));
    }

    Ok(tokens)
}

/// Parse a run of digits and dots, e.g. `12`, `.5`, `3.`.
fn parse_literal(run: &str) -> Result<f64, EvaluationError> {
    let malformed = || EvaluationError::MalformedNumber(run.to_string());

    if !run.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(malformed());
    }

    run.parse::<f64>().map_err(|_| malformed())
}
