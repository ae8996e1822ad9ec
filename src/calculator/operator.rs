//! The fixed operator registry.
//!
//! The set of operators is closed, so it lives in an enum rather than a map.
//! Every operator carries its symbol, its precedence and its binary function.

use std::fmt;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `^`
    Power,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `+`
    Add,
    /// `-`
    Subtract,
}

impl Operator {
    /// Every operator, in descending precedence order.
    pub const ALL: [Operator; 5] = [
        Self::Power,
        Self::Multiply,
        Self::Divide,
        Self::Add,
        Self::Subtract,
    ];

    /// Lowest precedence of any operator.
    pub const MIN_PRECEDENCE: u8 = 1;

    /// Highest precedence of any operator.
    pub const MAX_PRECEDENCE: u8 = 3;

    /// The single character this operator is written as.
    pub const fn symbol(self) -> char {
        match self {
            Self::Power => '^',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }

    /// Binding strength; higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Power => 3,
            Self::Multiply | Self::Divide => 2,
            Self::Add | Self::Subtract => 1,
        }
    }

    /// Apply the operator to two operands.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Power => a.powf(b),
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Add => a + b,
            Self::Subtract => a - b,
        }
    }

    /// Look up the operator written as `symbol`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Check if `c` is one of the operator symbols.
    pub fn is_symbol(c: char) -> bool {
        Self::from_symbol(c).is_some()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
