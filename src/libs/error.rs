//! Error types for the calculator core.
//!
//! Duration text parsing is total and never produces an error. The variants
//! here cover input that comes from a caller-controlled set:
//! operator symbols, keypad digits and characters of a key sequence.

use thiserror::Error;

/// Errors raised by the calculator model and keypad layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The symbol does not name an arithmetic operator.
    #[error("Operator '{0}' not supported.")]
    UnsupportedOperator(String),

    /// A digit key outside `0..=9` was pressed.
    #[error("Digit '{0}' is not a keypad digit.")]
    InvalidDigit(u8),

    /// A key sequence contained a character without a keypad binding.
    #[error("Key '{0}' is not on the keypad.")]
    UnknownKey(char),
}
