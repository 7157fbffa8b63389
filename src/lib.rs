//! Arbitrary-precision integer calculator.
//!
//! An expression is tokenized by a table-driven automaton, reduced with the
//! shunting-yard algorithm over [`BigInt`] operands and rendered in decimal.
//!
//! ```
//! let value = big_calc::evaluate("(2+3)*4 - ~1").unwrap();
//! assert_eq!(value.to_string(), "21");
//! ```

mod tokenizer;
mod parser;
pub mod error;
pub mod report;

pub use big_num::{ArithmeticError, BigInt};

pub use crate::error::{EvalError, Result};
pub use crate::parser::{evaluate, Evaluator, Operator};
pub use crate::report::{Report, ReportOptions};
