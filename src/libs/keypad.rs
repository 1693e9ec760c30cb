//! Keypad events and their textual encoding.
//!
//! The presentation layer only ever sends discrete [`Key`] events. For the
//! command line every key has a single-character spelling, so a whole
//! session can be written as one string such as `"05:50+03:30+"`.
//!
//! | Char      | Key                |
//! |-----------|--------------------|
//! | `0`..`9`  | digit              |
//! | `:`       | separator          |
//! | `+` `-`   | add, subtract      |
//! | `=`       | equals             |
//! | `~`       | negate             |
//! | `<`       | backspace          |
//! | `e`       | clear entry (CE)   |
//! | `c`       | clear all (C)      |
//! | `f`       | toggle time format |
//!
//! Whitespace between keys is ignored.

use super::error::CalcError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(u8),
    Separator,
    Add,
    Subtract,
    Equals,
    ClearEntry,
    ClearAll,
    Backspace,
    Negate,
    ToggleFormat,
}

impl Key {
    /// A digit key, or `InvalidDigit` outside `0..=9`.
    pub fn digit(value: u8) -> Result<Self, CalcError> {
        if value <= 9 {
            Ok(Key::Digit(value))
        } else {
            Err(CalcError::InvalidDigit(value))
        }
    }

    pub fn from_char(c: char) -> Result<Self, CalcError> {
        let key = match c {
            '0'..='9' => Key::Digit(c as u8 - b'0'),
            ':' => Key::Separator,
            '+' => Key::Add,
            '-' => Key::Subtract,
            '=' => Key::Equals,
            '~' => Key::Negate,
            '<' => Key::Backspace,
            'e' | 'E' => Key::ClearEntry,
            'c' | 'C' => Key::ClearAll,
            'f' | 'F' => Key::ToggleFormat,
            other => return Err(CalcError::UnknownKey(other)),
        };
        Ok(key)
    }

    pub fn as_char(&self) -> char {
        match self {
            Key::Digit(d) => char::from(b'0' + d % 10),
            Key::Separator => ':',
            Key::Add => '+',
            Key::Subtract => '-',
            Key::Equals => '=',
            Key::ClearEntry => 'e',
            Key::ClearAll => 'c',
            Key::Backspace => '<',
            Key::Negate => '~',
            Key::ToggleFormat => 'f',
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Splits a key sequence into keys, skipping whitespace.
///
/// ```rust
/// use hmcalc::libs::keypad::{parse_keys, Key};
///
/// let keys = parse_keys("1 + 2").unwrap();
/// assert_eq!(keys, vec![Key::Digit(1), Key::Add, Key::Digit(2)]);
/// assert!(parse_keys("1*2").is_err());
/// ```
pub fn parse_keys(sequence: &str) -> Result<Vec<Key>, CalcError> {
    sequence.chars().filter(|c| !c.is_whitespace()).map(Key::from_char).collect()
}
