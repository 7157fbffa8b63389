use big_num::{ArithmeticError, ParseBigIntError};
use thiserror::Error;

use crate::parser::Operator;

pub type Result<T> = std::result::Result<T, EvalError>;

/// Everything that can end an evaluation early. Positions are character
/// offsets into the expression text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unknown character `{ch}` at position {pos}")]
    UnknownCharacter { ch: char, pos: usize },

    #[error("unmatching parenthesis at position {pos}")]
    UnmatchedParenthesis { pos: usize },

    #[error("not enough operands in stack for `{operator}`")]
    NotEnoughOperands { operator: Operator },

    #[error("invalid stack after parsing expression ({operands} values left)")]
    InvalidStack { operands: usize },

    #[error(transparent)]
    Literal(#[from] ParseBigIntError),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl EvalError {
    /// Everything except a failed arithmetic operation comes from reading
    /// the expression text.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, EvalError::Arithmetic(_))
    }
}
