use std::{fmt, str::FromStr};

use crate::{CalcError, Float, Operator};

pub fn parse_operand(s: &str) -> Result<Float, CalcError> {
    let trimmed = s.trim();
    trimmed
        .parse::<Float>()
        .map_err(|_| CalcError::InvalidNumber(trimmed.to_string()))
}

/// A single binary operation such as `2 + 3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    pub lhs: Float,
    pub op: Operator,
    pub rhs: Float,
}

impl Expression {
    pub fn new(lhs: Float, op: Operator, rhs: Float) -> Self {
        Self { lhs, op, rhs }
    }

    pub fn evaluate(&self) -> Result<Float, CalcError> {
        self.op.checked_apply(self.lhs, self.rhs)
    }
}

/// Finds the binary operator, skipping symbols that act as a sign: a leading
/// one, one following another operator, or one following an exponent marker.
fn find_operator(expr: &str) -> Option<(usize, Operator)> {
    let mut prev: Option<char> = None;
    for (idx, c) in expr.char_indices() {
        if let Some(op) = Operator::from_symbol(c) {
            let is_sign = match prev {
                None => true,
                Some(p) => Operator::from_symbol(p).is_some() || p == 'e' || p == 'E',
            };
            if !is_sign {
                return Some((idx, op));
            }
        }
        prev = Some(c);
    }
    None
}

impl FromStr for Expression {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let invalid = || CalcError::InvalidExpression(s.trim().to_string());

        let (idx, op) = find_operator(&compact).ok_or_else(invalid)?;
        let (lhs, rhs) = (&compact[..idx], &compact[idx + 1..]);
        if lhs.is_empty() || rhs.is_empty() {
            return Err(invalid());
        }

        Ok(Expression::new(parse_operand(lhs)?, op, parse_operand(rhs)?))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}
