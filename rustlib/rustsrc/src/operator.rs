use std::{fmt, str::FromStr};

use crate::{arithmetic, CalcError, Float};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Applies the operator with the sentinel semantics of [`arithmetic::divide`].
    pub fn apply(self, a: Float, b: Float) -> Float {
        match self {
            Operator::Add => arithmetic::add(a, b),
            Operator::Subtract => arithmetic::subtract(a, b),
            Operator::Multiply => arithmetic::multiply(a, b),
            Operator::Divide => arithmetic::divide(a, b),
        }
    }

    /// Applies the operator, reporting division by exact zero as an error.
    pub fn checked_apply(self, a: Float, b: Float) -> Result<Float, CalcError> {
        match self {
            Operator::Divide => arithmetic::checked_divide(a, b),
            op => Ok(op.apply(a, b)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Operator::from_symbol(value).ok_or_else(|| CalcError::InvalidOperator(value.to_string()))
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Operator::try_from(symbol),
            _ => Err(CalcError::InvalidOperator(trimmed.to_string())),
        }
    }
}
