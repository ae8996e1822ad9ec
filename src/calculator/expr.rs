//! Expression tree and its evaluation.

use std::fmt;

use super::operator::Operator;

/// A parsed arithmetic expression.
///
/// Runs of operators with the same precedence are kept flat in a
/// [`Expr::Sequence`] and folded left to right, so a long chain like
/// `1+1+...+1` never produces a deep tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Number(f64),
    /// A sign applied to an operand, e.g. the `-3` in `2*-3`.
    Negate(Box<Expr>),
    /// `head op1 e1 op2 e2 ...`, all operators of one precedence.
    Sequence {
        head: Box<Expr>,
        tail: Vec<(Operator, Expr)>,
    },
}

impl Expr {
    pub fn evaluate(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Negate(inner) => -inner.evaluate(),
            Self::Sequence { head, tail } => tail
                .iter()
                .fold(head.evaluate(), |acc, (op, rhs)| op.apply(acc, rhs.evaluate())),
        }
    }
}

/// Fully parenthesized rendering, e.g. `((2 ^ 3) ^ 2)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Negate(inner) => write!(f, "(-{inner})"),
            Self::Sequence { head, tail } => {
                let mut rendered = head.to_string();
                for (op, rhs) in tail {
                    rendered = format!("({rendered} {op} {rhs})");
                }
                f.write_str(&rendered)
            }
        }
    }
}
