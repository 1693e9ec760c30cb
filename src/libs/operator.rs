//! Arithmetic operators of the keypad.

use super::error::CalcError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    /// Terminates a calculation. Never applied to operands.
    Equals,
}

impl Operation {
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Equals => "=",
        }
    }
}

/// An operator entry of a calculation.
///
/// Only `+` and `-` can be read from text; every other symbol, `=`
/// included, is rejected with [`CalcError::UnsupportedOperator`].
///
/// ```rust
/// use hmcalc::libs::operator::{Operation, Operator};
///
/// let op: Operator = "+".parse().unwrap();
/// assert_eq!(op.op, Operation::Add);
/// assert_eq!(
///     "=".parse::<Operator>().unwrap_err().to_string(),
///     "Operator '=' not supported."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    pub op: Operation,
}

impl Operator {
    pub fn new(op: Operation) -> Self {
        Self { op }
    }
}

impl From<Operation> for Operator {
    fn from(op: Operation) -> Self {
        Self::new(op)
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "+" => Ok(Self::new(Operation::Add)),
            "-" => Ok(Self::new(Operation::Subtract)),
            other => Err(CalcError::UnsupportedOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.op.symbol())
    }
}
