mod operator;
pub mod parser;

pub use crate::parser::operator::Operator;
pub use crate::parser::parser::{evaluate, Evaluator};
