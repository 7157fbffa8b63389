use std::fmt::{self, Display};

use big_num::{ArithmeticError, BigInt};

/// Binary operators of the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// Binding strength; equal strengths reduce left to right.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 2,
            Operator::Mul | Operator::Div => 3,
            Operator::Pow => 4,
        }
    }
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }
    /// `left = left OP right`.
    pub fn apply(self, left: &mut BigInt, right: &BigInt) -> Result<(), ArithmeticError> {
        match self {
            Operator::Add => *left += right,
            Operator::Sub => *left -= right,
            Operator::Mul => *left *= right,
            Operator::Div => left.checked_div_assign(right)?,
            Operator::Pow => left.checked_pow(right)?,
        }
        Ok(())
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[test]
fn test_apply() {
    let mut left = BigInt::from(7);
    Operator::Sub.apply(&mut left, &BigInt::from(10)).unwrap();
    assert_eq!(left, BigInt::from(-3));
    Operator::Pow.apply(&mut left, &BigInt::from(3)).unwrap();
    assert_eq!(left, BigInt::from(-27));
    Operator::Div.apply(&mut left, &BigInt::from(2)).unwrap();
    assert_eq!(left, BigInt::from(-13));
    assert_eq!(
        Operator::Div.apply(&mut left, &BigInt::zero()),
        Err(ArithmeticError::DivisionByZero)
    );
    assert_eq!(left, BigInt::from(-13));
}

#[test]
fn test_precedence() {
    assert!(Operator::Pow.precedence() > Operator::Mul.precedence());
    assert!(Operator::Div.precedence() > Operator::Sub.precedence());
    assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    assert_eq!(Operator::Mul.to_string(), "*");
}
