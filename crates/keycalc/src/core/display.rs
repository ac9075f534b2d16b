//! Display text, digit entry and number formatting
//!
//! [`DisplayText`] is the only way a string reaches the calculator display.
//! Its grammar is an optional `-`, at least one digit, and at most one `.`
//! followed by any number of digits. Every value it holds is finite.

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// A single keypad digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, rejecting anything above 9
    pub fn new(d: u8) -> CalcResult<Self> {
        if d <= 9 {
            Ok(Self(d))
        } else {
            Err(CalcError::InvalidDigit(d))
        }
    }

    /// Maps `'0'..='9'` to a digit
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(d: u8) -> CalcResult<Self> {
        Self::new(d)
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated text shown on the calculator display, with its parsed value
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayText {
    text: String,
    value: f64,
}

impl Default for DisplayText {
    fn default() -> Self {
        Self::zero()
    }
}

impl DisplayText {
    /// The cleared display
    pub const ZERO: &'static str = "0";

    /// Returns the cleared display `"0"`
    #[must_use]
    pub fn zero() -> Self {
        Self {
            text: Self::ZERO.to_string(),
            value: 0.0,
        }
    }

    /// Returns the single-digit display for a fresh entry
    #[must_use]
    pub fn from_digit(digit: Digit) -> Self {
        Self {
            text: digit.to_char().to_string(),
            value: f64::from(digit.value()),
        }
    }

    /// Parses raw text, failing fast on anything the display could not show
    pub fn parse(text: &str) -> CalcResult<Self> {
        let value = parse_number(text)?;
        Ok(Self {
            text: text.to_string(),
            value,
        })
    }

    /// Renders a computed value in plain decimal form
    pub fn from_value(value: f64) -> CalcResult<Self> {
        if !value.is_finite() {
            return Err(CalcError::Overflow);
        }
        let value = normalize_zero(value);
        Ok(Self {
            text: format_number(value),
            value,
        })
    }

    /// Returns the display text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the parsed value
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the text length in characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false: the display is never empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns true for the literal cleared text `"0"`
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.text == Self::ZERO
    }

    /// Returns true if the text already has a decimal point
    #[must_use]
    pub fn has_point(&self) -> bool {
        self.text.contains('.')
    }

    /// Appends a digit, replacing a lone `"0"`
    ///
    /// Fails with [`CalcError::Overflow`] when the longer number would no
    /// longer be a finite `f64`.
    pub(crate) fn with_digit(&self, digit: Digit) -> CalcResult<Self> {
        let mut text = if self.is_zero() {
            String::new()
        } else {
            self.text.clone()
        };
        text.push(digit.to_char());
        Self::parse(&text).map_err(|_| CalcError::Overflow)
    }

    /// Appends a decimal point; unchanged if one is already present
    pub(crate) fn with_point(&self) -> Self {
        if self.has_point() {
            return self.clone();
        }
        Self {
            text: format!("{}.", self.text),
            value: self.value,
        }
    }

    /// Drops the last character; a single character or a lone `-` becomes `"0"`
    pub(crate) fn without_last(&self) -> Self {
        let mut text = self.text.clone();
        text.pop();
        if text.is_empty() || text == "-" {
            return Self::zero();
        }
        Self::parse(&text).unwrap_or_else(|_| Self::zero())
    }

    /// Adds or removes the leading `-`; `"0"` is left alone
    pub(crate) fn with_sign_toggled(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let text = match self.text.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.text),
        };
        Self {
            text,
            value: -self.value,
        }
    }
}

impl std::fmt::Display for DisplayText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for DisplayText {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        Self::parse(s)
    }
}

/// Parses display-grammar text into a finite number
pub fn parse_number(text: &str) -> CalcResult<f64> {
    let invalid = |reason: &str| CalcError::ParseError(format!("{text:?}: {reason}"));

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    if unsigned.is_empty() {
        return Err(invalid("no digits"));
    }

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    if whole.is_empty() {
        return Err(invalid("missing leading digit"));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("unexpected character"));
    }
    if let Some(fraction) = fraction {
        if fraction.contains('.') {
            return Err(invalid("more than one decimal point"));
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("unexpected character"));
        }
    }

    let value: f64 = text.parse().map_err(|_| invalid("not a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid("out of range"))
    }
}

/// Formats a finite value as plain decimal text
///
/// Shortest text that round-trips, never an exponent, `-0` shown as `0`.
/// Unlike JavaScript's `String(n)`, values below `1e-6` or from `1e21` up
/// stay in positional form (`0.0000001`, not `1e-7`) so a result can always
/// be stored back as display text. Such results are usually long enough
/// that [`DisplayFormat::render`] shows them in exponential form anyway.
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{}", normalize_zero(value))
}

/// Enough fraction digits to hold the exact expansion of any finite `f64`
const EXACT_FRACTION_DIGITS: usize = 800;

/// Formats a value in exponential notation: `1.23457e+10`, `1.00000e-9`
///
/// The mantissa is rounded half away from zero on the exact binary value, so
/// `12345650000` becomes `1.23457e+10` the way `toExponential` renders it.
#[must_use]
pub fn format_exponential(value: f64, fraction_digits: usize) -> String {
    let value = normalize_zero(value);
    let exact = format!("{:.*e}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return exact;
    };
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    let keep = fraction_digits + 1;
    let round_up = digits.get(keep).is_some_and(|&d| d >= 5);
    digits.resize(keep, 0);
    if round_up && increment(&mut digits) {
        digits.insert(0, 1);
        digits.truncate(keep);
        exponent += 1;
    }

    let mut out = String::with_capacity(keep + 8);
    if value < 0.0 {
        out.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == 1 {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    out.push_str(&format!("e{sign}{}", exponent.unsigned_abs()));
    out
}

/// Adds one unit in the last place; returns true when the carry runs off the front
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// How the display text is rendered for the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFormat {
    /// Longest text shown verbatim; anything longer switches to exponential form
    pub max_plain_len: usize,
    /// Fraction digits of the exponential mantissa
    pub exponent_digits: usize,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            max_plain_len: Self::DEFAULT_MAX_PLAIN_LEN,
            exponent_digits: Self::DEFAULT_EXPONENT_DIGITS,
        }
    }
}

impl DisplayFormat {
    /// Default plain-text length limit
    pub const DEFAULT_MAX_PLAIN_LEN: usize = 10;
    /// Default exponential fraction digits
    pub const DEFAULT_EXPONENT_DIGITS: usize = 5;
    /// Largest fraction digit count accepted from configuration files
    pub const MAX_EXPONENT_DIGITS: usize = 20;

    /// Renders display text for the screen
    #[must_use]
    pub fn render(&self, text: &DisplayText) -> String {
        if text.len() > self.max_plain_len {
            format_exponential(text.value(), self.exponent_digits)
        } else {
            text.as_str().to_string()
        }
    }
}
