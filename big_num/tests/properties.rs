use big_num::BigInt;
use num_bigint::{BigInt as RefInt, Sign};
use proptest::prelude::*;

/// Random operand with its `num-bigint` twin.
fn arb_operand(max_limbs: usize) -> impl Strategy<Value = (BigInt, RefInt)> {
    (prop::collection::vec(any::<u32>(), 1..=max_limbs), any::<bool>()).prop_map(|(limbs, negative)| {
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        let reference = RefInt::from_slice(sign, &limbs);
        (BigInt::from_limbs(limbs, negative), reference)
    })
}

fn assert_canonical(value: &BigInt) {
    let limbs = value.limbs();
    assert!(!limbs.is_empty());
    if limbs.len() > 1 {
        assert_ne!(limbs[limbs.len() - 1], 0, "redundant leading limb in {:?}", limbs);
    }
    if value.is_zero() {
        assert!(!value.is_negative(), "negative zero");
    }
}

proptest! {
    #[test]
    fn sub_self_is_canonical_zero((a, _) in arb_operand(8)) {
        let mut result = a.clone();
        result -= &a;
        prop_assert_eq!(result.limbs(), &[0u32][..]);
        prop_assert!(!result.is_negative());
    }

    #[test]
    fn add_matches_reference((a, ra) in arb_operand(8), (b, rb) in arb_operand(8)) {
        let sum = &a + &b;
        assert_canonical(&sum);
        prop_assert_eq!(sum.to_string(), (&ra + &rb).to_string());
        prop_assert_eq!(&sum, &(&b + &a));
    }

    #[test]
    fn sub_matches_reference((a, ra) in arb_operand(8), (b, rb) in arb_operand(8)) {
        let difference = &a - &b;
        assert_canonical(&difference);
        prop_assert_eq!(difference.to_string(), (&ra - &rb).to_string());
    }

    #[test]
    fn add_is_associative((a, _) in arb_operand(6), (b, _) in arb_operand(6), (c, _) in arb_operand(6)) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn mul_matches_reference((a, ra) in arb_operand(8), (b, rb) in arb_operand(5)) {
        let product = &a * &b;
        assert_canonical(&product);
        prop_assert_eq!(product.to_string(), (&ra * &rb).to_string());
        prop_assert_eq!(&product, &(&b * &a));
    }

    #[test]
    fn mul_is_associative((a, _) in arb_operand(4), (b, _) in arb_operand(4), (c, _) in arb_operand(4)) {
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn mul_by_one_is_identity((a, _) in arb_operand(8)) {
        prop_assert_eq!(&a * &BigInt::one(), a);
    }

    #[test]
    fn div_truncates_like_reference((a, ra) in arb_operand(8), (b, rb) in arb_operand(4)) {
        prop_assume!(!b.is_zero());
        let quotient = a.checked_div(&b).unwrap();
        assert_canonical(&quotient);
        prop_assert_eq!(quotient.to_string(), (&ra / &rb).to_string());
        let back = &quotient * &b;
        prop_assert!(back.compare_mag(&a) != std::cmp::Ordering::Greater);
    }

    #[test]
    fn pow_matches_reference((a, ra) in arb_operand(3), exponent in 0u32..24) {
        let mut power = a.clone();
        power.pow(exponent);
        assert_canonical(&power);
        prop_assert_eq!(power.to_string(), ra.pow(exponent).to_string());
    }

    #[test]
    fn render_matches_reference((a, ra) in arb_operand(12)) {
        let digits = a.decimal_digits();
        prop_assert_eq!(digits.to_string(), ra.to_string());
        prop_assert_eq!(digits.digit_count(), ra.magnitude().to_string().len());
    }

    #[test]
    fn literal_round_trip(literal in "[0-9]{1,80}") {
        let value: BigInt = literal.parse().unwrap();
        let trimmed = literal.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(value.to_string(), expected);
    }
}
