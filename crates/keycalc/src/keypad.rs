//! Keypad keys and layout
//!
//! The layout is the calculator's 5x4 button grid:
//!
//! ```text
//! [ AC ] [ ⌫ ] [ ± ] [ ÷ ]
//! [ 7  ] [ 8 ] [ 9 ] [ × ]
//! [ 4  ] [ 5 ] [ 6 ] [ − ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [    0     ] [ . ] [ = ]
//! ```
//!
//! Keys can also be typed: [`parse_keys`] turns text such as `"12+3="` into
//! the key presses a user would make.

use crate::core::display::Digit;
use crate::core::{CalcError, CalcResult, Operator};

/// A single keypad key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter a digit (0-9)
    Digit(Digit),
    /// Enter a decimal point
    Decimal,
    /// Apply a binary operator
    Operator(Operator),
    /// Resolve the pending operation
    Equals,
    /// Reset everything (AC)
    Clear,
    /// Delete the last character
    Backspace,
    /// Flip the sign of the display
    ToggleSign,
}

impl Key {
    /// Returns the label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.label().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::ToggleSign => "±".to_string(),
        }
    }

    /// Maps a typed character to a key
    ///
    /// Accepts the button labels plus ASCII stand-ins: `*`/`x` multiply,
    /// `/` divide, `c` clear, `b` backspace, `n`/`~` sign.
    pub fn from_char(c: char) -> CalcResult<Self> {
        if let Some(d) = Digit::from_char(c) {
            return Ok(Self::Digit(d));
        }
        if let Some(op) = Operator::from_char(c) {
            return Ok(Self::Operator(op));
        }
        match c {
            '.' => Ok(Self::Decimal),
            '=' => Ok(Self::Equals),
            'c' | 'C' => Ok(Self::Clear),
            'b' | 'B' | '⌫' => Ok(Self::Backspace),
            'n' | 'N' | '~' | '±' => Ok(Self::ToggleSign),
            other => Err(CalcError::InvalidKey(other)),
        }
    }

    /// Looks a key up by its button label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("AC") {
            return Some(Self::Clear);
        }
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok(),
            _ => None,
        }
    }
}

impl From<Digit> for Key {
    fn from(d: Digit) -> Self {
        Self::Digit(d)
    }
}

impl From<Operator> for Key {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parses a typed key sequence
///
/// Whitespace is ignored and `AC` is read as one key in any case.
pub fn parse_keys(input: &str) -> CalcResult<Vec<Key>> {
    let mut keys = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if matches!(c, 'a' | 'A') {
            if chars.next_if(|next| matches!(next, 'c' | 'C')).is_some() {
                keys.push(Key::Clear);
                continue;
            }
            let word: String = std::iter::once(c)
                .chain(std::iter::from_fn(|| {
                    chars.next_if(|next| next.is_ascii_alphabetic())
                }))
                .collect();
            return Err(CalcError::InvalidToken(word));
        }
        keys.push(Key::from_char(c)?);
    }
    Ok(keys)
}

/// A button on the keypad grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The key this button presses
    pub key: Key,
    /// Grid row (0-indexed)
    pub row: usize,
    /// First grid column (0-indexed)
    pub col: usize,
    /// Number of columns the button covers
    pub span: usize,
}

impl KeypadButton {
    const fn new(key: Key, row: usize, col: usize) -> Self {
        Self {
            key,
            row,
            col,
            span: 1,
        }
    }

    const fn wide(key: Key, row: usize, col: usize, span: usize) -> Self {
        Self {
            key,
            row,
            col,
            span,
        }
    }

    /// Returns true if the button covers `(row, col)`
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// The calculator keypad layout
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Width of a single-column cell in [`render_text`](Self::render_text)
    const CELL_WIDTH: usize = 6;

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let digit = |d: u8, row, col| {
            Digit::new(d).map(|d| KeypadButton::new(Key::Digit(d), row, col))
        };
        let op = |op, row| KeypadButton::new(Key::Operator(op), row, 3);

        let mut buttons = vec![
            // Row 0: AC ⌫ ± ÷
            KeypadButton::new(Key::Clear, 0, 0),
            KeypadButton::new(Key::Backspace, 0, 1),
            KeypadButton::new(Key::ToggleSign, 0, 2),
            op(Operator::Divide, 0),
        ];
        // Rows 1-3: 7 8 9 × / 4 5 6 − / 1 2 3 +
        for (row, (first, operator)) in [
            (7, Operator::Multiply),
            (4, Operator::Subtract),
            (1, Operator::Add),
        ]
        .into_iter()
        .enumerate()
        {
            for col in 0..3 {
                buttons.extend(digit(first + col as u8, row + 1, col));
            }
            buttons.push(op(operator, row + 1));
        }
        // Row 4: 0 (double width) . =
        buttons.extend(digit(0, 4, 0).map(|b| KeypadButton::wide(b.key, 4, 0, 2)));
        buttons.push(KeypadButton::new(Key::Decimal, 4, 2));
        buttons.push(KeypadButton::new(Key::Equals, 4, 3));

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&KeypadButton> {
        let key = Key::from_label(label)?;
        self.find_by_key(key)
    }

    /// Finds the button that presses `key`
    #[must_use]
    pub fn find_by_key(&self, key: Key) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.key == key)
    }

    /// Renders the grid as plain text, one line per row
    #[must_use]
    pub fn render_text(&self) -> String {
        (0..self.rows)
            .map(|row| {
                self.buttons
                    .iter()
                    .filter(|b| b.row == row)
                    .map(|b| {
                        let inner = Self::CELL_WIDTH * b.span - 2;
                        format!("[{:^inner$}]", b.key.label())
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
