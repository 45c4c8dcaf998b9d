//! Property-based tests for the reference codec.

use chrono::{Datelike, NaiveDate};
use cie_reference::{
    build_reference, checksum, compress_date, split_reference, verify_reference, Amount,
    ReferenceInput,
};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2014i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn input_strategy() -> impl Strategy<Value = ReferenceInput> {
    (
        prop_oneof![Just("01"), Just("02"), Just("06")],
        "[0-9]{8,10}",
        0u64..10_000_000,
        date_strategy(),
    )
        .prop_map(|(concept, student, cents, due)| {
            ReferenceInput::new(concept, student, Amount::from_cents(cents), due)
        })
}

// =============================================================================
// Checksum
// =============================================================================

proptest! {
    /// Checksum is two digits in 01..=97
    #[test]
    fn prop_checksum_range(s in "[A-Z0-9]{1,64}") {
        let digits = checksum(&s);
        prop_assert_eq!(digits.len(), 2);
        prop_assert!(digits.chars().all(|c| c.is_ascii_digit()));
        let value: u32 = digits.parse().unwrap();
        prop_assert!((1..=97).contains(&value));
    }

    /// base + checksum(base) always verifies, and splitting returns the pieces
    #[test]
    fn prop_checksum_round_trip(base in "[A-Z0-9]{2,64}") {
        let full = format!("{}{}", base, checksum(&base));
        prop_assert!(verify_reference(&full));
        let (b, d) = split_reference(&full).unwrap();
        prop_assert_eq!(b, base.as_str());
        prop_assert_eq!(d, checksum(b));
    }
}

// =============================================================================
// Date compressor
// =============================================================================

proptest! {
    /// Within one year, later dates compress to larger numbers
    #[test]
    fn prop_date_monotonic_within_year(a in date_strategy(), b in date_strategy()) {
        let b = NaiveDate::from_ymd_opt(a.year(), b.month(), b.day()).unwrap();
        let ca: u64 = compress_date(a).unwrap().parse().unwrap();
        let cb: u64 = compress_date(b).unwrap().parse().unwrap();
        prop_assert_eq!(a.cmp(&b), ca.cmp(&cb));
    }

    /// Token is at least four digits
    #[test]
    fn prop_date_width(d in date_strategy()) {
        let token = compress_date(d).unwrap();
        prop_assert!(token.len() >= 4);
        prop_assert!(token.chars().all(|c| c.is_ascii_digit()));
    }
}

// =============================================================================
// Builder
// =============================================================================

proptest! {
    /// Same input, same reference
    #[test]
    fn prop_build_deterministic(input in input_strategy()) {
        let first = build_reference(&input).unwrap();
        let second = build_reference(&input).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(verify_reference(&first.full));
        prop_assert_eq!(first.full.len(), first.base.len() + 2);
    }
}
