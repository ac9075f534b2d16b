//! keycalc - keypad calculator engine
//!
//! The state machine behind a four-function pocket calculator: digit and
//! decimal entry, chained operators resolved left to right, sign toggle,
//! backspace, clear and equals, plus a display that switches to exponential
//! notation when the text gets too long.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.press_all(parse_keys("5 + 3 × 2 =").unwrap()).unwrap();
//! assert_eq!(engine.current_display(), "16");
//!
//! // Division by zero shows 0 unless strict mode is on
//! engine.press_all(parse_keys("9 ÷ 0 =").unwrap()).unwrap();
//! assert_eq!(engine.current_display(), "0");
//!
//! let mut strict = CalculatorEngine::with_config(EngineConfig::strict());
//! assert!(strict.press_all(parse_keys("9 ÷ 0 =").unwrap()).is_err());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::core::display::{Digit, DisplayFormat, DisplayText};
    pub use crate::core::engine::{CalculatorEngine, EngineSnapshot, Phase};
    pub use crate::core::{CalcError, CalcResult, DivisionPolicy, Operator};
    pub use crate::keypad::{parse_keys, Key, Keypad, KeypadButton};
}
