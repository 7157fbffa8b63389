//! Big Num \
//! This crate provides:
//! - [`BigInt`]: sign-magnitude arbitrary-precision integers over 32-bit limbs,
//!   with in-place addition, subtraction, multiplication, truncating division
//!   and exponentiation.
//! - [`DecimalDigits`]: the decimal rendering of a [`BigInt`], computed by
//!   repeated doubling.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod decimal;
mod error;

pub use big_int::BigInt;
pub use decimal::DecimalDigits;
pub use error::{ArithmeticError, ParseBigIntError};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!(a.to_string(), "10000000000000");
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((-&a).to_string(), "-10000000000000");
    }
}
