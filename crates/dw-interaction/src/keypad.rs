use std::str::FromStr;

use rust_decimal::Decimal;

pub const MAX_INTEGER_DIGITS: usize = 7;
pub const MAX_FRACTION_DIGITS: usize = 2;

const SEPARATOR: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// 0-9; anything larger is rejected
    Digit(u8),
    Separator,
    Backspace,
}

/// Text typed on the custom amount keypad.
///
/// Holds at most 7 integer and 2 fraction digits with a single separator. A lone
/// leading zero is replaced by the next non-zero digit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountInput {
    text: String,
}

impl AmountInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    fn integer_digits(&self) -> usize {
        self.text.split(SEPARATOR).next().map_or(0, str::len)
    }

    fn fraction_digits(&self) -> Option<usize> {
        self.text.split_once(SEPARATOR).map(|(_, f)| f.len())
    }

    /// Apply one keystroke. Returns whether the text changed.
    pub fn press(&mut self, key: Key) -> bool {
        match key {
            Key::Digit(d) if d > 9 => false,
            Key::Digit(d) => self.push_digit(char::from(b'0' + d)),
            Key::Separator => {
                if self.fraction_digits().is_some() {
                    return false;
                }
                if self.text.is_empty() {
                    self.text.push('0');
                }
                self.text.push(SEPARATOR);
                true
            }
            Key::Backspace => self.text.pop().is_some(),
        }
    }

    fn push_digit(&mut self, digit: char) -> bool {
        match self.fraction_digits() {
            Some(len) if len >= MAX_FRACTION_DIGITS => false,
            Some(_) => {
                self.text.push(digit);
                true
            }
            None if self.text == "0" => {
                if digit == '0' {
                    return false;
                }
                self.text.clear();
                self.text.push(digit);
                true
            }
            None if self.integer_digits() >= MAX_INTEGER_DIGITS => false,
            None => {
                self.text.push(digit);
                true
            }
        }
    }

    /// Numeric value; `None` while empty. A trailing separator reads as its integer part.
    pub fn value(&self) -> Option<Decimal> {
        let trimmed = self.text.trim_end_matches(SEPARATOR);
        if trimmed.is_empty() {
            return None;
        }
        Decimal::from_str(trimmed).ok()
    }
}
