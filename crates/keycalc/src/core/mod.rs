//! Core calculator module
//!
//! - `operations`: the four binary operators and their arithmetic
//! - `display`: validated display text, digits and number formatting
//! - `engine`: the keypad-driven state machine

pub mod display;
pub mod engine;
mod operations;

pub use operations::{apply, DivisionPolicy, Operator};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// With the default lenient division policy and in-range values the engine
/// never produces one of these; they surface at the parsing boundary and in
/// strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted (strict division policy only)
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is not a finite number
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Malformed numeric text
    #[error("Invalid number: {0}")]
    ParseError(String),
    /// Digit outside 0-9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),
    /// Character that maps to no keypad key
    #[error("Invalid key: {0:?}")]
    InvalidKey(char),
    /// Word token that maps to no keypad key
    #[error("Invalid key token: {0:?}")]
    InvalidToken(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError display tests =====

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        assert_eq!(
            CalcError::Overflow.to_string(),
            "Overflow: result exceeds maximum value"
        );
    }

    #[test]
    fn test_calc_error_display_parse_error() {
        let err = CalcError::ParseError("1..2".into());
        assert_eq!(err.to_string(), "Invalid number: 1..2");
    }

    #[test]
    fn test_calc_error_display_invalid_digit() {
        assert_eq!(CalcError::InvalidDigit(12).to_string(), "Invalid digit: 12");
    }

    #[test]
    fn test_calc_error_display_invalid_key() {
        assert_eq!(CalcError::InvalidKey('?').to_string(), "Invalid key: '?'");
    }

    #[test]
    fn test_calc_error_display_invalid_token() {
        let err = CalcError::InvalidToken("sqrt".into());
        assert_eq!(err.to_string(), "Invalid key token: \"sqrt\"");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }
}
