use big_num::BigInt;
use log::{debug, trace};

use super::operator::Operator;
use crate::error::{EvalError, Result};
use crate::tokenizer::{ExprTokenType, Token, EXPR_TOKENIZER};

// 运算符优先级 (从低到高)
// ( )      0, only bounds sub-expressions
// + -      2
// * /      3
// ^        4
// Equal precedence reduces left to right, so `2^3^2` is `(2^3)^2`.

#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    LeftScope { pos: usize },
}

/// Shunting-yard evaluation of one expression. Operators are reduced
/// against the operand stack as soon as precedence allows, so the postfix
/// form is executed on the fly rather than materialised. Nothing outlives
/// [`Evaluator::evaluate`].
pub struct Evaluator<'a> {
    origin: &'a str,
    operands: Vec<BigInt>,
    operators: Vec<Pending>,
}

impl<'a> Evaluator<'a> {
    pub fn new(origin: &'a str) -> Self {
        Evaluator { origin, operands: Vec::new(), operators: Vec::new() }
    }
    pub fn evaluate(mut self) -> Result<BigInt> {
        let tokens = EXPR_TOKENIZER.tokenize(self.origin)?;
        debug!("evaluating {} tokens", tokens.len());
        for token in tokens {
            self.proceed_token(token)?;
        }

        // Apply remaining operators
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::LeftScope { pos } => return Err(EvalError::UnmatchedParenthesis { pos }),
                Pending::Operator(operator) => self.apply(operator)?,
            }
        }

        // The operand stack should only contain the result
        match (self.operands.pop(), self.operands.len()) {
            (Some(result), 0) => {
                debug!("result has {} limbs", result.len());
                Ok(result)
            }
            (None, _) => Err(EvalError::InvalidStack { operands: 0 }),
            (Some(_), left) => Err(EvalError::InvalidStack { operands: left + 1 }),
        }
    }
    fn proceed_token(&mut self, token: Token<ExprTokenType>) -> Result<()> {
        match token.ty {
            ExprTokenType::Num => {
                let literal = read_number(&token)?;
                self.operands.push(literal);
            }
            ExprTokenType::Add => self.proceed_operator(Operator::Add)?,
            ExprTokenType::Sub => self.proceed_operator(Operator::Sub)?,
            ExprTokenType::Mul => self.proceed_operator(Operator::Mul)?,
            ExprTokenType::Div => self.proceed_operator(Operator::Div)?,
            ExprTokenType::Pow => self.proceed_operator(Operator::Pow)?,
            ExprTokenType::LeftScope => self.operators.push(Pending::LeftScope { pos: token.pos }),
            ExprTokenType::RightScope => self.close_scope(token.pos)?,
            ExprTokenType::Blank => {}
        }
        Ok(())
    }
    /// Reduces every stacked operator that binds at least as tightly, then
    /// stacks `operator`. An open parenthesis stops the reduction.
    fn proceed_operator(&mut self, operator: Operator) -> Result<()> {
        while let Some(&Pending::Operator(top)) = self.operators.last() {
            if top.precedence() < operator.precedence() {
                break;
            }
            self.operators.pop();
            self.apply(top)?;
        }
        self.operators.push(Pending::Operator(operator));
        Ok(())
    }
    fn close_scope(&mut self, pos: usize) -> Result<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::LeftScope { .. }) => return Ok(()),
                Some(Pending::Operator(operator)) => self.apply(operator)?,
                None => return Err(EvalError::UnmatchedParenthesis { pos }),
            }
        }
    }
    /// Pops the right operand, then folds it into the left one in place.
    fn apply(&mut self, operator: Operator) -> Result<()> {
        let right = self
            .operands
            .pop()
            .ok_or(EvalError::NotEnoughOperands { operator })?;
        let left = self
            .operands
            .last_mut()
            .ok_or(EvalError::NotEnoughOperands { operator })?;
        trace!("reducing `{}` over {} and {} limbs", operator, left.len(), right.len());
        operator.apply(left, &right)?;
        Ok(())
    }
}

/// Literal token: an optional `~` followed by decimal digits. The tokenizer
/// only emits `Num` tokens of that shape.
fn read_number(token: &Token<ExprTokenType>) -> Result<BigInt> {
    Ok(token.val.parse::<BigInt>()?)
}

/// Evaluates `origin` to a single value.
pub fn evaluate(origin: &str) -> Result<BigInt> {
    Evaluator::new(origin).evaluate()
}

#[cfg(test)]
mod test {
    use super::{evaluate, read_number};
    use crate::error::EvalError;
    use crate::parser::Operator;
    use crate::tokenizer::{ExprTokenType, Token};
    use big_num::{BigInt, ParseBigIntError};

    fn eval(origin: &str) -> String {
        evaluate(origin).unwrap().to_string()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2+3*4"), "14");
        assert_eq!(eval("(2+3)*4"), "20");
        assert_eq!(eval("2*3^2"), "18");
        assert_eq!(eval("2^3^2"), "64");
        assert_eq!(eval("10-4-3"), "3");
        assert_eq!(eval("100/10/5"), "2");
        assert_eq!(eval("((7))"), "7");
    }

    #[test]
    fn test_negative_literal() {
        assert_eq!(eval("~5+3"), "-2");
        assert_eq!(eval("~5*~5"), "25");
        assert_eq!(eval("3-~2"), "5");
        assert_eq!(evaluate("~0").unwrap(), BigInt::zero());
    }

    #[test]
    fn test_read_number() {
        let token = Token::new("~0042".to_string(), ExprTokenType::Num, 3);
        assert_eq!(read_number(&token), Ok(BigInt::from(-42)));
        let token = Token::new(String::new(), ExprTokenType::Num, 0);
        assert_eq!(read_number(&token), Err(EvalError::Literal(ParseBigIntError::Empty)));
    }

    #[test]
    fn test_errors() {
        assert_eq!(evaluate("(1+2"), Err(EvalError::UnmatchedParenthesis { pos: 0 }));
        assert_eq!(evaluate("1+2)"), Err(EvalError::UnmatchedParenthesis { pos: 3 }));
        assert_eq!(
            evaluate("1+"),
            Err(EvalError::NotEnoughOperands { operator: Operator::Add })
        );
        assert_eq!(
            evaluate("*1"),
            Err(EvalError::NotEnoughOperands { operator: Operator::Mul })
        );
        assert_eq!(evaluate("1@2"), Err(EvalError::UnknownCharacter { ch: '@', pos: 1 }));
        assert_eq!(evaluate(""), Err(EvalError::InvalidStack { operands: 0 }));
        assert_eq!(evaluate("()"), Err(EvalError::InvalidStack { operands: 0 }));
        assert_eq!(evaluate("1 2"), Err(EvalError::InvalidStack { operands: 2 }));
    }
}
