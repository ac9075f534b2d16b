//! Binary operators and their arithmetic
//!
//! The operator set is a closed enum: the keypad can never hand the engine
//! an operation it does not know.

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// The four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad column order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the ASCII operator symbol
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the label printed on the keypad button
    #[must_use]
    pub const fn label(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Maps an ASCII symbol or keypad label to an operator
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What division by zero produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionPolicy {
    /// `a ÷ 0` yields `0`, the keypad app's historical behavior
    #[default]
    Lenient,
    /// `a ÷ 0` is rejected with [`CalcError::DivisionByZero`]
    Strict,
}

/// Applies `op` to `a` and `b`
///
/// Non-finite results are rejected with [`CalcError::Overflow`] so the
/// caller can keep its display parseable.
pub fn apply(op: Operator, a: f64, b: f64, policy: DivisionPolicy) -> CalcResult<f64> {
    let raw = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide if b == 0.0 => match policy {
            DivisionPolicy::Lenient => 0.0,
            DivisionPolicy::Strict => return Err(CalcError::DivisionByZero),
        },
        Operator::Divide => a / b,
    };
    check_finite(raw)
}

fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}
