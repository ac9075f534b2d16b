//! Keypad-driven calculator engine
//!
//! The engine is a plain state object. A UI calls one operation per key
//! press and then re-reads [`CalculatorEngine::current_display`].
//!
//! Operators chain left to right without precedence: `5 + 3 × 2 =` is
//! `(5 + 3) × 2`. Each operator key resolves the operator pending before it.

use crate::config::EngineConfig;
use crate::core::display::{Digit, DisplayText};
use crate::core::{apply, CalcResult, Operator};
use crate::keypad::Key;
use serde::Serialize;
use tracing::{debug, trace, warn};

/// Where the engine is in an operation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Nothing captured
    #[default]
    Idle,
    /// An operand is captured but no operator waits for a second one
    AccumulatorSet {
        /// Captured operand
        accumulator: f64,
    },
    /// An operator waits for its second operand
    OperatorPending {
        /// First operand
        accumulator: f64,
        /// Operator to apply
        operator: Operator,
    },
}

impl Phase {
    /// Returns the captured operand, if any
    #[must_use]
    pub const fn accumulator(&self) -> Option<f64> {
        match self {
            Self::Idle => None,
            Self::AccumulatorSet { accumulator } | Self::OperatorPending { accumulator, .. } => {
                Some(*accumulator)
            }
        }
    }

    /// Returns the pending operator, if any
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        match self {
            Self::OperatorPending { operator, .. } => Some(*operator),
            _ => None,
        }
    }
}

/// Serializable view of the engine state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSnapshot {
    /// Raw display text
    pub display_text: String,
    /// Display as rendered for the screen
    pub display: String,
    /// State-machine phase
    #[serde(flatten)]
    pub phase: Phase,
    /// Whether the next digit starts a new number
    pub awaiting_new_entry: bool,
}

/// The calculator engine
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    display: DisplayText,
    phase: Phase,
    awaiting_new_entry: bool,
    config: EngineConfig,
}

impl CalculatorEngine {
    /// Creates an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the raw display text
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.display.as_str()
    }

    /// Returns the display value
    #[must_use]
    pub const fn display_value(&self) -> f64 {
        self.display.value()
    }

    /// Returns the state-machine phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the captured operand, if any
    #[must_use]
    pub const fn accumulator(&self) -> Option<f64> {
        self.phase.accumulator()
    }

    /// Returns the operator waiting for its second operand, if any
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        self.phase.pending_operator()
    }

    /// Returns true if the next digit replaces the display
    #[must_use]
    pub const fn is_awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// Enters a digit
    pub fn input_digit(&mut self, digit: Digit) {
        if self.awaiting_new_entry {
            self.display = DisplayText::from_digit(digit);
            self.awaiting_new_entry = false;
        } else {
            match self.display.with_digit(digit) {
                Ok(display) => self.display = display,
                Err(e) => warn!(%digit, display = %self.display, "digit dropped: {e}"),
            }
        }
        trace!(display = %self.display, "digit entered");
    }

    /// Enters a decimal point; a second point in the same number is ignored
    pub fn input_decimal_point(&mut self) {
        if self.awaiting_new_entry {
            self.display = DisplayText::zero().with_point();
            self.awaiting_new_entry = false;
        } else {
            self.display = self.display.with_point();
        }
        trace!(display = %self.display, "decimal point entered");
    }

    /// Resets to the initial state
    pub fn clear(&mut self) {
        self.display = DisplayText::zero();
        self.phase = Phase::Idle;
        self.awaiting_new_entry = false;
        debug!("cleared");
    }

    /// Removes the last display character
    pub fn backspace(&mut self) {
        self.display = self.display.without_last();
        trace!(display = %self.display, "backspace");
    }

    /// Flips the sign of the display; `"0"` is left alone
    pub fn toggle_sign(&mut self) {
        self.display = self.display.with_sign_toggled();
        trace!(display = %self.display, "sign toggled");
    }

    /// Replaces the display with raw numeric text, as if it had been typed
    pub fn set_display(&mut self, text: &str) -> CalcResult<()> {
        self.display = DisplayText::parse(text)?;
        self.awaiting_new_entry = false;
        trace!(display = %self.display, "display set");
        Ok(())
    }

    /// Applies a binary operator
    ///
    /// The first operator captures the display as the accumulator. Later ones
    /// resolve the pending operator against the display first, so the
    /// running result shows up immediately.
    ///
    /// On error (strict division by zero, overflow) the state is unchanged.
    pub fn set_operator(&mut self, op: Operator) -> CalcResult<()> {
        self.resolve(Some(op))
    }

    /// Resolves the pending operation
    ///
    /// A no-op unless an operator is pending, so pressing it twice does not
    /// repeat the last operation.
    pub fn equals(&mut self) -> CalcResult<()> {
        if !matches!(self.phase, Phase::OperatorPending { .. }) {
            trace!("equals ignored: nothing pending");
            return Ok(());
        }
        self.resolve(None)?;
        self.phase = Phase::Idle;
        self.awaiting_new_entry = true;
        debug!(display = %self.display, "equals");
        Ok(())
    }

    /// Shared step of [`set_operator`](Self::set_operator) and
    /// [`equals`](Self::equals); `next` is `None` for equals
    fn resolve(&mut self, next: Option<Operator>) -> CalcResult<()> {
        let input = self.display.value();
        let (accumulator, result) = match self.phase {
            Phase::Idle => (input, None),
            Phase::AccumulatorSet { accumulator } => (accumulator, None),
            Phase::OperatorPending {
                accumulator,
                operator,
            } => {
                let value = apply(operator, accumulator, input, self.config.division)
                    .map_err(|e| {
                        debug!(%operator, accumulator, input, "operation rejected: {e}");
                        e
                    })?;
                let shown = DisplayText::from_value(value)?;
                debug!(%operator, accumulator, input, result = %shown, "resolved");
                (shown.value(), Some(shown))
            }
        };

        if let Some(display) = result {
            self.display = display;
        }
        self.awaiting_new_entry = true;
        self.phase = match next {
            Some(operator) => Phase::OperatorPending {
                accumulator,
                operator,
            },
            None => Phase::AccumulatorSet { accumulator },
        };
        Ok(())
    }

    /// Dispatches one keypad key
    pub fn press(&mut self, key: Key) -> CalcResult<()> {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Decimal => self.input_decimal_point(),
            Key::Operator(op) => return self.set_operator(op),
            Key::Equals => return self.equals(),
            Key::Clear => self.clear(),
            Key::Backspace => self.backspace(),
            Key::ToggleSign => self.toggle_sign(),
        }
        Ok(())
    }

    /// Presses keys in order, stopping at the first error
    pub fn press_all<I>(&mut self, keys: I) -> CalcResult<()>
    where
        I: IntoIterator<Item = Key>,
    {
        keys.into_iter().try_for_each(|key| self.press(key))
    }

    /// Returns the display as rendered for the screen
    ///
    /// Text longer than the configured limit (10 characters by default) is
    /// shown in exponential form, e.g. `1.23457e+10`.
    #[must_use]
    pub fn current_display(&self) -> String {
        self.config.display.render(&self.display)
    }

    /// Captures the current state
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            display_text: self.display.as_str().to_string(),
            display: self.current_display(),
            phase: self.phase,
            awaiting_new_entry: self.awaiting_new_entry,
        }
    }
}
