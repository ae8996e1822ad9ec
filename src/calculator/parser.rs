//! Precedence-climbing parser turning tokens into an [`Expr`].
//!
//! GRAMMAR (one `level` per precedence in the operator registry):
//!   level(p)  --> level(p + 1) ( op_p level(p + 1) )*     for p <= MAX_PRECEDENCE
//!   level(p)  --> operand                                  for p >  MAX_PRECEDENCE
//!   operand   --> NUMBER | group | "-" ( NUMBER | group )
//!   group     --> "(" level(MIN_PRECEDENCE) ")"
//!
//! Every level folds left to right, `^` included.

use super::error::EvaluationError;
use super::expr::Expr;
use super::lexer::Token;
use super::operator::Operator;

/// Deepest bracket nesting accepted before giving up.
pub const MAX_NESTING: usize = 256;

pub type ParseResult<T> = Result<T, EvaluationError>;

/// Parse a complete token stream.
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(EvaluationError::EmptyInput);
    }

    let mut parser = Parser::new(tokens);
    let expr = parser.parse_level(Operator::MIN_PRECEDENCE)?;

    // Every operator was consumed above, so only brackets or operands remain.
    match parser.peek() {
        None => Ok(expr),
        Some(Token::RParen) => Err(EvaluationError::MismatchedBrackets),
        Some(_) => Err(EvaluationError::MissingOperator),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn previous(&self) -> Option<Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i).copied())
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_level(&mut self, precedence: u8) -> ParseResult<Expr> {
        if precedence > Operator::MAX_PRECEDENCE {
            return self.parse_operand();
        }

        let head = self.parse_level(precedence + 1)?;
        let mut tail = Vec::new();

        while let Some(Token::Operator(op)) = self.peek()
            && op.precedence() == precedence
        {
            self.pos += 1;
            tail.push((op, self.parse_level(precedence + 1)?));
        }

        if tail.is_empty() {
            Ok(head)
        } else {
            Ok(Expr::Sequence {
                head: Box::new(head),
                tail,
            })
        }
    }

    fn parse_operand(&mut self) -> ParseResult<Expr> {
        match self.peek() {
            Some(Token::Operator(Operator::Subtract)) => {
                self.pos += 1;
                let operand = self.parse_unsigned()?;
                Ok(Expr::Negate(Box::new(operand)))
            }
            _ => self.parse_unsigned(),
        }
    }

    fn parse_unsigned(&mut self) -> ParseResult<Expr> {
        match self.peek() {
            Some(Token::Number(value)) => {
                self.pos += 1;
                Ok(Expr::Number(value))
            }
            Some(Token::LParen) => {
                self.pos += 1;
                self.parse_group()
            }
            Some(Token::Operator(_)) => Err(EvaluationError::MissingOperand),
            Some(Token::RParen) | None => Err(self.missing_operand_at_end()),
        }
    }

    /// Parse the inside of a group whose `(` was just consumed.
    fn parse_group(&mut self) -> ParseResult<Expr> {
        if self.depth >= MAX_NESTING {
            return Err(EvaluationError::NestingTooDeep { limit: MAX_NESTING });
        }

        match self.peek() {
            Some(Token::RParen) => return Err(EvaluationError::EmptyInput),
            Some(Token::Operator(op)) if op != Operator::Subtract => {
                return Err(EvaluationError::LeadingOperator);
            }
            _ => {}
        }

        self.depth += 1;
        let inner = self.parse_level(Operator::MIN_PRECEDENCE)?;
        self.depth -= 1;

        match self.advance() {
            Some(Token::RParen) => Ok(inner),
            None => Err(EvaluationError::MismatchedBrackets),
            Some(_) => Err(EvaluationError::MissingOperator),
        }
    }

    /// Error for an operand slot that hits `)` or the end of input.
    fn missing_operand_at_end(&self) -> EvaluationError {
        match self.previous() {
            Some(Token::Operator(_)) => EvaluationError::TrailingOperator,
            _ => EvaluationError::MismatchedBrackets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::lexer::tokenize;

    fn parse_str(input: &str) -> ParseResult<Expr> {
        parse(&tokenize(input)?)
    }

    fn shape(input: &str) -> String {
        parse_str(input).unwrap().to_string()
    }

    #[test]
    fn test_precedence_shapes() {
        assert_eq!(shape("2+3*4"), "(2 + (3 * 4))");
        assert_eq!(shape("2*3+4"), "((2 * 3) + 4)");
        assert_eq!(shape("1-2+3"), "((1 - 2) + 3)");
        assert_eq!(shape("2*3^2"), "(2 * (3 ^ 2))");
    }

    #[test]
    fn test_power_is_left_associative() {
        // Deliberately left to right, matching every other level.
        assert_eq!(shape("2^3^2"), "((2 ^ 3) ^ 2)");
    }

    #[test]
    fn test_groups() {
        assert_eq!(shape("(2+3)*4"), "((2 + 3) * 4)");
        assert_eq!(shape("((7))"), "7");
    }

    #[test]
    fn test_signs() {
        assert_eq!(shape("2*-3"), "(2 * (-3))");
        assert_eq!(shape("(-2)^2"), "((-2) ^ 2)");
        assert_eq!(shape("2^-(1+1)"), "(2 ^ (-(1 + 1)))");
        assert_eq!(shape("(-3^2)"), "((-3) ^ 2)");
    }

    #[test]
    fn test_group_contract() {
        assert_eq!(parse_str("2*()"), Err(EvaluationError::EmptyInput));
        assert_eq!(parse_str("2*(+3)"), Err(EvaluationError::LeadingOperator));
        assert_eq!(parse_str("2*(3+)"), Err(EvaluationError::TrailingOperator));
        assert_eq!(parse_str("(-)"), Err(EvaluationError::TrailingOperator));
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(parse_str("2*+3"), Err(EvaluationError::MissingOperand));
        assert_eq!(parse_str("2-+3"), Err(EvaluationError::MissingOperand));
        assert_eq!(parse_str("(2)3"), Err(EvaluationError::MissingOperator));
        assert_eq!(parse_str("1)+(2"), Err(EvaluationError::MismatchedBrackets));
        assert_eq!(parse_str(")1("), Err(EvaluationError::MismatchedBrackets));
        assert_eq!(parse_str("(1"), Err(EvaluationError::MismatchedBrackets));
        assert_eq!(parse(&[]), Err(EvaluationError::EmptyInput));
    }

    #[test]
    fn test_nesting_limit() {
        let ok = format!("{}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert_eq!(parse_str(&ok).unwrap().evaluate(), 1.0);

        let deep = format!(
            "{}1{}",
            "(".repeat(MAX_NESTING + 1),
            ")".repeat(MAX_NESTING + 1)
        );
        assert_eq!(
            parse_str(&deep),
            Err(EvaluationError::NestingTooDeep { limit: MAX_NESTING })
        );
    }

    #[test]
    fn test_long_chain_stays_flat() {
        let input = vec!["1"; 10_000].join("+");
        assert_eq!(parse_str(&input).unwrap().evaluate(), 10_000.0);
    }
}
