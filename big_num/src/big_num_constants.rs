/// Width of one limb in bits.
pub const LIMB_BITS: u32 = u32::BITS;

/// Largest power of ten that fits a `u64` chunk twice over, so a chunk sum
/// plus carry never overflows.
pub const DECIMAL_CHUNK_BASE: u64 = 1_000_000_000_000_000_000;

/// Decimal digits held by one full chunk.
pub const DECIMAL_CHUNK_DIGITS: usize = 18;

/// Values in `0..=MAX_CONSTANT` are served from the constant cache.
pub const MAX_CONSTANT: usize = 16;

pub const DECIMAL_RADIX: u32 = 10;
