//! Property-based invariants of the validator.
//!
//! 1. Values inside the range (and > 0 for intake amounts) are accepted
//! 2. Values beyond the maximum are rejected with the maximum message
//! 3. Re-validating a sanitized value returns the same value
//! 4. Non-empty masked text is never reported as missing
//! 5. Arbitrary text is either rejected with a message or accepted within range

use proptest::prelude::*;
use vitals_validator::{validate, InputMask, MeasurementKind, RejectReason, DEFAULT_LIMITS};

fn arb_kind() -> impl Strategy<Value = MeasurementKind> {
    prop_oneof![
        Just(MeasurementKind::Water),
        Just(MeasurementKind::Calories),
        Just(MeasurementKind::Weight),
        Just(MeasurementKind::Height),
        Just(MeasurementKind::Age),
    ]
}

/// A kind together with a value it should accept
fn arb_accepted() -> impl Strategy<Value = (MeasurementKind, f64)> {
    prop_oneof![
        (1u32..=10_000).prop_map(|v| (MeasurementKind::Water, f64::from(v))),
        (0.5f64..=10_000.0).prop_map(|v| (MeasurementKind::Calories, v)),
        (20.0f64..=500.0).prop_map(|v| (MeasurementKind::Weight, v)),
        (50.0f64..=250.0).prop_map(|v| (MeasurementKind::Height, v)),
        (10u32..=120).prop_map(|v| (MeasurementKind::Age, f64::from(v))),
    ]
}

proptest! {
    #[test]
    fn in_range_values_are_accepted((kind, value) in arb_accepted()) {
        let outcome = validate(kind, value);
        prop_assert!(outcome.is_valid(), "{kind} {value}: {outcome:?}");
    }

    #[test]
    fn above_maximum_is_rejected(kind in arb_kind(), excess in 0.001f64..1_000_000.0) {
        let max = DEFAULT_LIMITS.get(kind).max;
        let outcome = validate(kind, max + excess);
        let is_above = matches!(outcome.reason(), Some(RejectReason::AboveMaximum { .. }));
        prop_assert!(is_above, "{kind}: {outcome:?}");
    }

    #[test]
    fn sanitized_value_is_a_fixed_point((kind, value) in arb_accepted()) {
        let first = validate(kind, value).sanitized_value();
        prop_assume!(first.is_some());
        let sanitized = first.unwrap_or_default();
        prop_assert_eq!(validate(kind, sanitized).sanitized_value(), Some(sanitized));
    }

    #[test]
    fn masked_text_is_never_missing(kind in arb_kind(), text in "[0-9a-z.,-]{1,8}") {
        let masked = kind.input_mask().mask(&text);
        prop_assume!(!masked.is_empty());
        prop_assert!(kind.input_mask().accepts(&masked));
        let outcome = validate(kind, masked.as_str());
        let is_missing = matches!(outcome.reason(), Some(RejectReason::MissingValue { .. }));
        prop_assert!(!is_missing);
    }

    #[test]
    fn digits_mask_output_is_all_digits(text in "\\PC{0,16}") {
        let masked = InputMask::Digits.mask(&text);
        prop_assert!(masked.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn arbitrary_text_is_rejected_or_in_range(kind in arb_kind(), text in "\\PC{0,12}") {
        let outcome = validate(kind, text.as_str());
        if let Some(value) = outcome.sanitized_value() {
            let limit = DEFAULT_LIMITS.get(kind);
            prop_assert!(value >= limit.min && value <= limit.max);
        } else {
            prop_assert!(outcome.message().is_some_and(|m| !m.is_empty()));
        }
    }
}
