//! Binary to decimal conversion without big-integer division.
//!
//! The value is rebuilt in base `10^18` by walking its bits from the least
//! significant one up: a running power of two is doubled at every bit and
//! added into the accumulator whenever the bit is set.

use std::fmt::{self, Display, Write as _};

use crate::BigInt;
use crate::big_num_constants::*;

/// Decimal form of a [`BigInt`], as 18-digit chunks least significant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalDigits {
    chunks: Vec<u64>,
    negative: bool,
}

impl DecimalDigits {
    /// Chunks in `[0, 10^18)`, least significant first, never empty.
    pub fn chunks(&self) -> &[u64] {
        &self.chunks
    }
    pub fn is_negative(&self) -> bool {
        self.negative
    }
    /// Number of decimal digits, sign excluded. Zero counts as one digit.
    pub fn digit_count(&self) -> usize {
        let mut top = self.chunks[self.chunks.len() - 1] / 10;
        let mut top_digits = 1;
        while top > 0 {
            top_digits += 1;
            top /= 10;
        }
        (self.chunks.len() - 1) * DECIMAL_CHUNK_DIGITS + top_digits
    }
}

impl BigInt {
    pub fn decimal_digits(&self) -> DecimalDigits {
        let mut accumulator = vec![0_u64];
        let mut power = vec![1_u64];
        for &limb in self.limbs() {
            let mut digit = limb;
            for _ in 0..LIMB_BITS {
                if digit & 1 == 1 {
                    add_chunks(&mut accumulator, &power);
                }
                digit >>= 1;
                double_chunks(&mut power);
            }
        }
        DecimalDigits { chunks: accumulator, negative: self.is_negative() }
    }
}

/// `base += term`, chunk-wise with carry, growing `base` as needed.
fn add_chunks(base: &mut Vec<u64>, term: &[u64]) {
    if base.len() < term.len() {
        base.resize(term.len(), 0);
    }
    let mut carry = 0;
    for (rank, chunk) in base.iter_mut().enumerate() {
        if rank >= term.len() && carry == 0 {
            break;
        }
        let value = *chunk + term.get(rank).copied().unwrap_or(0) + carry;
        *chunk = value % DECIMAL_CHUNK_BASE;
        carry = value / DECIMAL_CHUNK_BASE;
    }
    if carry != 0 {
        base.push(carry);
    }
}

fn double_chunks(chunks: &mut Vec<u64>) {
    let mut carry = 0;
    for chunk in chunks.iter_mut() {
        let value = *chunk * 2 + carry;
        *chunk = value % DECIMAL_CHUNK_BASE;
        carry = value / DECIMAL_CHUNK_BASE;
    }
    if carry != 0 {
        chunks.push(carry);
    }
}

/// Most significant chunk unpadded, every other chunk padded to 18 digits.
impl Display for DecimalDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.chunks.len() * DECIMAL_CHUNK_DIGITS);
        let mut chunks = self.chunks.iter().rev();
        if let Some(top) = chunks.next() {
            write!(digits, "{}", top)?;
        }
        for chunk in chunks {
            write!(digits, "{:0width$}", chunk, width = DECIMAL_CHUNK_DIGITS)?;
        }
        f.pad_integral(!self.negative, "", &digits)
    }
}
