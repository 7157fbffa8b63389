//! # BigInt
//! Sign-magnitude arbitrary-precision integers. The magnitude is a sequence of
//! 32-bit limbs, least significant first; the sign is kept apart from it.
//!
//! Every arithmetic routine mutates its receiver in place and leaves it in
//! canonical form: no redundant most-significant zero limb, and zero is a
//! single zero limb that is never negative.
//! # Example
//! ```
//! use big_num::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "10900000000000");
//! assert_eq!((&a - &b).to_string(), "9100000000000");
//! assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
//! assert_eq!((&a / &b).to_string(), "11");
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Neg,
};
use std::str::FromStr;

use log::trace;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{ArithmeticError, ParseBigIntError};

/// Forwards the owned and borrowed operator forms to `$assign_imp<&BigInt>`,
/// which holds the in-place algorithm.
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident) => {
        impl $assign_imp for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                <BigInt as $assign_imp<&BigInt>>::$assign_method(self, &rhs);
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: &BigInt) -> Self::Output {
                <BigInt as $assign_imp<&BigInt>>::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $imp for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: BigInt) -> Self::Output {
                <BigInt as $assign_imp<&BigInt>>::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                let mut result = self.clone();
                <BigInt as $assign_imp<&BigInt>>::$assign_method(&mut result, rhs);
                result
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// Least significant limb first, never empty.
    mag: Vec<u32>,
    negative: bool,
}

// 实现构造
impl BigInt {
    /// Single-limb value. A negative zero is folded to zero.
    pub fn new(value: u32, negative: bool) -> Self {
        let mut result = BigInt { mag: vec![value], negative };
        result.normalize();
        result
    }
    /// `len` zero limbs, used as scratch space by the arithmetic routines.
    /// Not canonical until normalized.
    pub(crate) fn zeroed(len: usize) -> Self {
        BigInt { mag: vec![0; len.max(1)], negative: false }
    }
    pub fn zero() -> Self {
        BigInt::zeroed(1)
    }
    pub fn one() -> Self {
        BigInt::new(1, false)
    }
    /// Takes limbs least significant first; redundant zero limbs are trimmed.
    pub fn from_limbs(mut mag: Vec<u32>, negative: bool) -> Self {
        if mag.is_empty() {
            mag.push(0);
        }
        let mut result = BigInt { mag, negative };
        result.normalize();
        result
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// 杂项辅助函数
impl BigInt {
    /// Limb of the given rank, or 0 past the most significant limb.
    #[inline(always)]
    pub fn limb(&self, rank: usize) -> u32 {
        self.mag.get(rank).copied().unwrap_or(0)
    }
    pub fn limbs(&self) -> &[u32] {
        &self.mag
    }
    /// Number of limbs, always at least one.
    pub fn len(&self) -> usize {
        self.mag.len()
    }
    pub fn is_negative(&self) -> bool {
        self.negative
    }
    pub fn is_zero(&self) -> bool {
        self.mag.len() == 1 && self.mag[0] == 0
    }
    /// Trims redundant most-significant zero limbs and clears the sign of zero.
    pub(crate) fn normalize(&mut self) {
        while self.mag.len() > 1 && self.mag[self.mag.len() - 1] == 0 {
            self.mag.pop();
        }
        if self.mag.is_empty() {
            self.mag.push(0);
        }
        if self.is_zero() {
            self.negative = false;
        }
    }
    pub fn set_zero(&mut self) {
        self.mag.clear();
        self.mag.push(0);
        self.negative = false;
    }
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }
}

// 实现解析
macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u64, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_num!(u8, u16, u32, usize, u64);
impl_signed_to_big_num!(i8, i16, i32, isize, i64);

impl BigInt {
    fn value_of(val: u64, negative: bool) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            if negative {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            }
        } else {
            BigInt::from_limbs(vec![val as u32, (val >> LIMB_BITS) as u32], negative)
        }
    }
    /// Builds a value from decimal digits with Horner's rule,
    /// `result = result * 10 + digit`. No multiplication is spent on leading
    /// zeros.
    pub fn from_decimal_digits(digits: &str, negative: bool) -> Result<BigInt, ParseBigIntError> {
        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        let mut result = BigInt::zero();
        for (pos, ch) in digits.chars().enumerate() {
            let digit = ch
                .to_digit(DECIMAL_RADIX)
                .ok_or(ParseBigIntError::InvalidDigit { ch, pos })?;
            if result.is_zero() {
                result.mag[0] = digit;
            } else {
                result.mul_add_limb(DECIMAL_RADIX, digit);
            }
        }
        result.negative = negative;
        result.normalize();
        Ok(result)
    }
    /// `self = self * factor + addend` over the magnitude.
    fn mul_add_limb(&mut self, factor: u32, addend: u32) {
        let mut carry = addend as u64;
        for limb in self.mag.iter_mut() {
            let product = (*limb as u64) * (factor as u64) + carry;
            *limb = product as u32;
            carry = product >> LIMB_BITS;
        }
        if carry != 0 {
            self.mag.push(carry as u32);
        }
        self.normalize();
    }
}

/// Accepts an optional `+`, `-` or `~` sign followed by decimal digits.
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match val.strip_prefix(|c: char| c == '-' || c == '~') {
            Some(rest) => (true, rest),
            None => (false, val.strip_prefix('+').unwrap_or(val)),
        };
        let offset = val.chars().count() - digits.chars().count();
        BigInt::from_decimal_digits(digits, negative).map_err(|err| match err {
            ParseBigIntError::InvalidDigit { ch, pos } => {
                ParseBigIntError::InvalidDigit { ch, pos: pos + offset }
            }
            other => other,
        })
    }
}

// 实现大小比较
impl BigInt {
    /// Compares absolute values: limb count first, then limbs from the most
    /// significant down.
    pub fn compare_mag(&self, other: &BigInt) -> Ordering {
        match self.mag.len().cmp(&other.mag.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (a, b) in self.mag.iter().rev().zip(other.mag.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.compare_mag(other),
            (true, true) => other.compare_mag(self),
        }
    }
}

// 实现加法
impl BigInt {
    /// `self + term`, with `term` read as carrying the sign `term_negative`.
    /// Subtraction is this with the sign flipped.
    fn add_signed(&mut self, term: &BigInt, term_negative: bool) {
        if self.negative == term_negative {
            self.add_mag(term);
            return;
        }
        match self.compare_mag(term) {
            Ordering::Greater => self.sub_mag(term),
            Ordering::Less => {
                // always subtract the smaller magnitude from the larger
                let mut result = term.clone();
                result.negative = term_negative;
                result.sub_mag(self);
                *self = result;
            }
            Ordering::Equal => self.set_zero(),
        }
    }
    /// `|self| + |term|`, sign untouched.
    fn add_mag(&mut self, term: &BigInt) {
        let len = self.mag.len().max(term.mag.len()) + 1;
        let mut sum = Vec::with_capacity(len);
        let mut carry = 0_u64;
        for rank in 0..len {
            let digit = self.limb(rank) as u64 + term.limb(rank) as u64 + carry;
            sum.push(digit as u32);
            carry = digit >> LIMB_BITS;
        }
        self.mag = sum;
        self.normalize();
    }
    /// `|self| - |term|`, sign untouched. Requires `|self| >= |term|`.
    fn sub_mag(&mut self, term: &BigInt) {
        debug_assert!(self.compare_mag(term) != Ordering::Less);
        let mut borrow = false;
        let mut rank = 0;
        while rank < term.mag.len() || borrow {
            let (digit, under) = self.mag[rank].overflowing_sub(term.limb(rank));
            let (digit, under_borrow) = digit.overflowing_sub(borrow as u32);
            self.mag[rank] = digit;
            borrow = under || under_borrow;
            rank += 1;
        }
        self.normalize();
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, term: &BigInt) {
        self.add_signed(term, term.negative);
    }
}

forward_binop!(Add, add, AddAssign, add_assign);

// 实现减法
impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, term: &BigInt) {
        self.add_signed(term, !term.negative);
    }
}

forward_binop!(Sub, sub, SubAssign, sub_assign);

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

// 实现乘法
impl BigInt {
    /// Schoolbook product of two magnitudes: one single-limb partial product
    /// per limb of the shorter operand, shifted by that limb's rank and added
    /// into the result.
    fn mul_mag(x: &[u32], y: &[u32]) -> BigInt {
        let (smallest, biggest) = if x.len() > y.len() { (y, x) } else { (x, y) };
        let mut product = BigInt::zeroed(x.len() + y.len());
        for (rank, &digit) in smallest.iter().enumerate() {
            if digit == 0 {
                continue;
            }
            let mut term = BigInt::zeroed(rank + biggest.len() + 1);
            let mut carry = 0_u64;
            for (offset, &limb) in biggest.iter().enumerate() {
                let partial = (digit as u64) * (limb as u64) + carry;
                term.mag[rank + offset] = partial as u32;
                carry = partial >> LIMB_BITS;
            }
            term.mag[rank + biggest.len()] = carry as u32;
            product.add_mag(&term);
        }
        product.normalize();
        product
    }
    /// `|self| * digit` as a new non-negative value.
    fn mul_limb(&self, digit: u32) -> BigInt {
        let mut product = BigInt::zeroed(self.mag.len() + 1);
        let mut carry = 0_u64;
        for (rank, &limb) in self.mag.iter().enumerate() {
            let partial = (digit as u64) * (limb as u64) + carry;
            product.mag[rank] = partial as u32;
            carry = partial >> LIMB_BITS;
        }
        product.mag[self.mag.len()] = carry as u32;
        product.normalize();
        product
    }
    pub fn square(&mut self) {
        *self = BigInt::mul_mag(&self.mag, &self.mag);
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, factor: &BigInt) {
        let negative = self.negative != factor.negative;
        let mut product = BigInt::mul_mag(&self.mag, &factor.mag);
        product.negative = negative;
        product.normalize();
        *self = product;
    }
}

forward_binop!(Mul, mul, MulAssign, mul_assign);

// 实现除法
impl BigInt {
    /// Quotient truncated toward zero, in place. The remainder is discarded.
    pub fn checked_div_assign(&mut self, divisor: &BigInt) -> Result<(), ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.div_truncate(divisor);
        Ok(())
    }
    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt, ArithmeticError> {
        let mut quotient = self.clone();
        quotient.checked_div_assign(divisor)?;
        Ok(quotient)
    }
    /// Long division over limbs. A window holding the top limbs of the
    /// dividend yields one quotient limb per step; the window is then shifted
    /// up one limb and fed the next unconsumed limb of the dividend.
    fn div_truncate(&mut self, divisor: &BigInt) {
        if self.compare_mag(divisor) == Ordering::Less {
            self.set_zero();
            return;
        }
        let negative = self.negative != divisor.negative;
        let mut unconsumed = self.mag.len() - divisor.mag.len();
        let mut quotient = vec![0_u32; unconsumed + 1];
        let mut window = BigInt::from_limbs(self.mag[unconsumed..].to_vec(), false);

        for rank in (0..quotient.len()).rev() {
            quotient[rank] = window.take_quotient_limb(divisor);
            if unconsumed > 0 {
                unconsumed -= 1;
                window.mag.insert(0, self.mag[unconsumed]);
                window.normalize();
            }
        }
        trace!(
            "divided {} limbs by {} limbs into {} quotient limbs",
            self.mag.len(),
            divisor.mag.len(),
            quotient.len()
        );
        *self = BigInt::from_limbs(quotient, negative);
    }
    /// Returns the largest `q` with `q * |divisor| <= self`, found one bit at
    /// a time from the high bit down, and leaves `self - q * |divisor|` behind.
    /// The window must be below `|divisor| * 2^32`.
    fn take_quotient_limb(&mut self, divisor: &BigInt) -> u32 {
        let mut digit = 0_u32;
        for bit in (0..LIMB_BITS).rev() {
            let candidate = digit | (1 << bit);
            if divisor.mul_limb(candidate).compare_mag(self) != Ordering::Greater {
                digit = candidate;
            }
        }
        self.sub_mag(&divisor.mul_limb(digit));
        digit
    }
}

/// Panics on a zero divisor, like the primitive integers.
/// Use [`BigInt::checked_div_assign`] to get an error instead.
impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, divisor: &BigInt) {
        assert!(!divisor.is_zero(), "attempt to divide by zero");
        self.div_truncate(divisor);
    }
}

forward_binop!(Div, div, DivAssign, div_assign);

// 实现乘方
impl BigInt {
    /// Square-and-multiply exponentiation. `x^0` is 1 for every `x`; the
    /// result is negative only for a negative base and an odd exponent.
    pub fn pow(&mut self, exponent: u32) {
        let negative = self.negative && exponent % 2 == 1;
        let mut factor = BigInt::from_limbs(std::mem::take(&mut self.mag), false);
        let mut result = BigInt::one();
        let mut remaining = exponent;
        while remaining != 0 {
            if remaining & 1 == 1 {
                result *= &factor;
            }
            remaining >>= 1;
            if remaining != 0 {
                factor.square();
            }
        }
        result.negative = negative;
        result.normalize();
        *self = result;
    }
    /// Exponent given as a big integer. It must be non-negative and fit in a
    /// single limb; the receiver is left untouched otherwise.
    pub fn checked_pow(&mut self, exponent: &BigInt) -> Result<(), ArithmeticError> {
        if exponent.mag.len() != 1 {
            return Err(ArithmeticError::ExponentOutOfRange);
        }
        if exponent.negative {
            return Err(ArithmeticError::NegativeExponent);
        }
        trace!("raising {} limbs to the power {}", self.mag.len(), exponent.mag[0]);
        self.pow(exponent.mag[0]);
        Ok(())
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.decimal_digits(), f)
    }
}

#[cfg(test)]
fn big(val: &str) -> BigInt {
    val.parse().unwrap()
}

#[test]
fn test_from() {
    assert_eq!(BigInt::from(0u32).limbs(), &[0]);
    assert_eq!(BigInt::from(-5i32), BigInt::new(5, true));
    assert_eq!(BigInt::from(u64::MAX).limbs(), &[u32::MAX, u32::MAX]);
    assert_eq!(BigInt::from(i64::MIN).limbs(), &[0, 0x8000_0000]);
    assert!(BigInt::from(i64::MIN).is_negative());
    assert_eq!(BigInt::from(1u64 << 32).limbs(), &[0, 1]);
    assert_eq!(BigInt::new(0, true), BigInt::zero());
    assert_eq!(BigInt::from_limbs(vec![7, 0, 0], false).limbs(), &[7]);
    assert_eq!(BigInt::from_limbs(vec![], true), BigInt::zero());
}

#[test]
fn test_limb_out_of_range() {
    let a = BigInt::from(u64::MAX);
    assert_eq!(a.limb(1), u32::MAX);
    assert_eq!(a.limb(2), 0);
    assert_eq!(a.limb(100), 0);
}

#[test]
fn test_from_str() {
    assert_eq!(big("00042"), BigInt::from(42));
    assert_eq!(big("~42"), BigInt::from(-42));
    assert_eq!(big("-0"), BigInt::zero());
    assert_eq!(big("18446744073709551616").limbs(), &[0, 0, 1]);
    assert_eq!("".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    assert_eq!("-".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    assert_eq!(
        "-12a".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { ch: 'a', pos: 3 })
    );
    assert_eq!(
        "~12é4".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { ch: 'é', pos: 3 })
    );
    assert_eq!(
        BigInt::from_decimal_digits("9π", false),
        Err(ParseBigIntError::InvalidDigit { ch: 'π', pos: 1 })
    );
}

#[test]
fn test_compare() {
    assert_eq!(big("100").compare_mag(&big("-99")), Ordering::Greater);
    assert_eq!(big("-99").compare_mag(&big("100")), Ordering::Less);
    assert_eq!(big("4294967296").compare_mag(&big("4294967295")), Ordering::Greater);
    assert_eq!(big("~7").compare_mag(&big("7")), Ordering::Equal);
    assert!(big("-100") < big("-99"));
    assert!(big("-1") < big("0"));
    assert!(big("18446744073709551616") > big("18446744073709551615"));
}

#[test]
fn test_add() {
    let a = big("4294967295");
    let b = big("1");
    assert_eq!((&a + &b).limbs(), &[0, 1]);
    assert_eq!(&big("10000000000000") + &big("900000000000"), big("10900000000000"));
    assert_eq!(&big("-5") + &big("3"), big("-2"));
    assert_eq!(&big("5") + &big("-8"), big("-3"));
    assert_eq!(&big("-5") + &big("-8"), big("-13"));
    assert_eq!(&big("18446744073709551616") + &big("-18446744073709551616"), BigInt::zero());
}

#[test]
fn test_sub() {
    assert_eq!(&big("10000000000000") - &big("900000000000"), big("9100000000000"));
    assert_eq!(&big("18446744073709551616") - &big("1"), big("18446744073709551615"));
    assert_eq!(&big("1") - &big("18446744073709551616"), big("-18446744073709551615"));
    assert_eq!(&big("-3") - &big("-3"), BigInt::zero());
    assert_eq!(&big("0") - &big("0"), BigInt::zero());
    assert_eq!(&big("0") - &big("7"), big("-7"));

    let mut a = big("123456789012345678901234567890");
    let b = a.clone();
    a -= &b;
    assert_eq!(a.limbs(), &[0]);
    assert!(!a.is_negative());
}

#[test]
fn test_mul() {
    assert_eq!(&big("10000000000000") * &big("900000000000"), big("9000000000000000000000000"));
    assert_eq!(
        &big("12345678901234567890") * &big("98765432109876543210"),
        big("1219326311370217952237463801111263526900")
    );
    let max = BigInt::from(u32::MAX);
    assert_eq!((&max * &max).limbs(), &[1, 0xFFFF_FFFE]);
    assert_eq!(&big("-3") * &big("4"), big("-12"));
    assert_eq!(&big("-3") * &big("-4"), big("12"));
    assert_eq!(&big("-3") * &big("0"), BigInt::zero());
    assert!(!(&big("-3") * &big("0")).is_negative());

    let mut a = big("-18446744073709551616");
    a.square();
    assert_eq!(a, big("340282366920938463463374607431768211456"));
}

#[test]
fn test_div() {
    assert_eq!(big("120") / big("13"), big("9"));
    assert_eq!(big("7") / big("2"), big("3"));
    assert_eq!(big("-7") / big("2"), big("-3"));
    assert_eq!(big("7") / big("-2"), big("-3"));
    assert_eq!(big("-7") / big("-2"), big("3"));
    assert_eq!(big("3") / big("-7"), BigInt::zero());
    assert_eq!(
        big("10000000000000000000000000000000000") / big("1000"),
        big("10000000000000000000000000000000")
    );
    assert_eq!(
        big("340282366920938463463374607431768211456") / big("18446744073709551617"),
        big("18446744073709551615")
    );
    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(a / b, c);
}

#[test]
fn test_checked_div() {
    let mut a = big("42");
    assert_eq!(a.checked_div_assign(&BigInt::zero()), Err(ArithmeticError::DivisionByZero));
    assert_eq!(a, big("42"));
    assert_eq!(a.checked_div(&big("-6")), Ok(big("-7")));
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_div_by_zero_panics() {
    let _ = big("1") / big("0");
}

#[test]
fn test_pow() {
    let mut a = big("2");
    a.pow(10);
    assert_eq!(a, big("1024"));

    let mut a = big("~3");
    a.pow(3);
    assert_eq!(a, big("-27"));

    let mut a = big("-3");
    a.pow(4);
    assert_eq!(a, big("81"));

    let mut a = big("3");
    a.pow(100);
    assert_eq!(a, big("515377520732011331036461129765621272702107522001"));

    let mut a = big("-7");
    a.pow(33);
    assert_eq!(a, big("-7730993719707444524137094407"));

    let mut a = big("0");
    a.pow(0);
    assert_eq!(a, BigInt::one());

    let mut a = big("-12345678901234567890");
    a.pow(0);
    assert_eq!(a, BigInt::one());
}

#[test]
fn test_checked_pow() {
    let mut a = big("2");
    assert_eq!(a.checked_pow(&big("4294967296")), Err(ArithmeticError::ExponentOutOfRange));
    assert_eq!(a.checked_pow(&big("-1")), Err(ArithmeticError::NegativeExponent));
    assert_eq!(a, big("2"));
    assert_eq!(a.checked_pow(&big("64")), Ok(()));
    assert_eq!(a, big("18446744073709551616"));
}
