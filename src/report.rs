use std::fmt;

use big_num::BigInt;

/// Which detail blocks accompany the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Limb count, sign and raw limbs before the value.
    pub binary_details: bool,
    /// `--Decimal--` header and digit count around the value.
    pub decimal_details: bool,
}

/// Console rendering of an evaluation result.
pub struct Report<'a> {
    value: &'a BigInt,
    options: ReportOptions,
}

impl<'a> Report<'a> {
    pub fn new(value: &'a BigInt, options: ReportOptions) -> Self {
        Report { value, options }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.value.decimal_digits();
        if self.options.binary_details {
            writeln!(f, "--Binary--")?;
            writeln!(f, "Length : {}", self.value.len())?;
            writeln!(f, "{}", if digits.is_negative() { "Negative" } else { "Positive" })?;
            writeln!(f, "Digits :")?;
            for limb in self.value.limbs() {
                write!(f, "{}  ", limb)?;
            }
            writeln!(f)?;
        }

        if self.options.decimal_details {
            writeln!(f, "--Decimal--")?;
        }
        writeln!(f, "{}", digits)?;
        if self.options.decimal_details {
            writeln!(f, "Length")?;
            writeln!(f, "{}", digits.digit_count())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Report, ReportOptions};
    use big_num::BigInt;

    #[test]
    fn test_plain() {
        let value = BigInt::from(-2i32);
        assert_eq!(Report::new(&value, ReportOptions::default()).to_string(), "-2\n");
    }

    #[test]
    fn test_details() {
        let value = BigInt::from_limbs(vec![0, 0, 1], true);
        let options = ReportOptions { binary_details: true, decimal_details: true };
        assert_eq!(
            Report::new(&value, options).to_string(),
            "--Binary--\nLength : 3\nNegative\nDigits :\n0  0  1  \n\
             --Decimal--\n-18446744073709551616\nLength\n20\n"
        );
    }

    #[test]
    fn test_sign_line() {
        let options = ReportOptions { binary_details: true, decimal_details: false };
        let negative = BigInt::from(-7);
        assert!(Report::new(&negative, options).to_string().contains("\nNegative\n"));
        let zero = &BigInt::from(-7) + &BigInt::from(7);
        assert_eq!(
            Report::new(&zero, options).to_string(),
            "--Binary--\nLength : 1\nPositive\nDigits :\n0  \n0\n"
        );
    }

    #[test]
    fn test_zero_length() {
        let value = BigInt::zero();
        let options = ReportOptions { binary_details: false, decimal_details: true };
        assert_eq!(Report::new(&value, options).to_string(), "--Decimal--\n0\nLength\n1\n");
    }
}
