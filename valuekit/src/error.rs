//! Error types for number parsing.

use thiserror::Error;

/// Result alias used throughout valuekit.
pub type Result<T> = std::result::Result<T, NumberFormatError>;

/// Reasons a string is not a number under a given [`NumberFormat`](crate::NumberFormat).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberFormatError {
    #[error("input is empty")]
    Empty,

    #[error("unexpected character {ch:?} at index {position}")]
    InvalidCharacter { position: usize, ch: char },

    #[error("number has no digits")]
    MissingDigits,

    #[error("exponent has no digits at index {position}")]
    MissingExponentDigits { position: usize },

    #[error("opening parenthesis is never closed")]
    UnbalancedParenthesis,

    /// The format descriptor itself is unusable.
    #[error("invalid number format: {0}")]
    InvalidFormat(&'static str),

    /// The rewritten literal was refused by the float parser.
    #[error("cannot represent {0:?} as a float")]
    Unrepresentable(String),
}
