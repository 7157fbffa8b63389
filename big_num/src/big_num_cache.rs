use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = {
        let mut cache: [BigInt; MAX_CONSTANT + 1] = Default::default();
        for (value, slot) in cache.iter_mut().enumerate() {
            *slot = BigInt::new(value as u32, false);
        }
        cache
    };
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = {
        let mut cache: [BigInt; MAX_CONSTANT + 1] = Default::default();
        for (value, slot) in cache.iter_mut().enumerate() {
            *slot = BigInt::new(value as u32, true);
        }
        cache
    };
}

#[test]
fn test_cache_is_canonical() {
    assert_eq!(POS_CACHE[0], NEG_CACHE[0]);
    assert!(!NEG_CACHE[0].is_negative());
    assert!(NEG_CACHE[7].is_negative());
    assert_eq!(POS_CACHE[16].limbs(), &[16]);
}
