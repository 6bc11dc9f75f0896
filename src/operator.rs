//! Closed operator alphabet for the dispatcher
//!
//! External operator tokens are validated here, at the boundary, so the
//! arithmetic core only ever sees one of the four known operators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::precise::CalcError;

/// The four supported binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// The conventional single-character token for this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(token: char) -> Result<Self, Self::Error> {
        match token {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(CalcError::UnsupportedOperator(other)),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.trim().chars();
        match (tokens.next(), tokens.next()) {
            (Some(token), None) => Operator::try_from(token),
            _ => Err(CalcError::UnsupportedOperator(s.chars().next().unwrap_or(' '))),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_char() {
        assert_eq!(Operator::try_from('+').unwrap(), Operator::Add);
        assert_eq!(Operator::try_from('-').unwrap(), Operator::Subtract);
        assert_eq!(Operator::try_from('*').unwrap(), Operator::Multiply);
        assert_eq!(Operator::try_from('/').unwrap(), Operator::Divide);
    }

    #[test]
    fn test_try_from_rejects_unknown_tokens() {
        assert_eq!(Operator::try_from('%'), Err(CalcError::UnsupportedOperator('%')));
        assert_eq!(Operator::try_from('^'), Err(CalcError::UnsupportedOperator('^')));
        assert_eq!(Operator::try_from('x'), Err(CalcError::UnsupportedOperator('x')));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!(" / ".parse::<Operator>().unwrap(), Operator::Divide);
        assert!("%".parse::<Operator>().is_err());
        assert!("++".parse::<Operator>().is_err());
        assert!("".parse::<Operator>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for op in [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide] {
            assert_eq!(op.to_string().parse::<Operator>().unwrap(), op);
        }
    }
}
