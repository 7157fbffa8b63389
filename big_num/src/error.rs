use thiserror::Error;

/// Failures of the checked arithmetic routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("exponent out of range (size over 32 bits)")]
    ExponentOutOfRange,
    #[error("negative exponent")]
    NegativeExponent,
}

/// Failures of [`str::parse`] for [`crate::BigInt`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    #[error("empty literal")]
    Empty,
    /// `pos` counts characters, sign included.
    #[error("invalid digit `{ch}` at position {pos}")]
    InvalidDigit { ch: char, pos: usize },
}
