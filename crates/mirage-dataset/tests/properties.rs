use mirage_dataset::{build_vector, hash_string, percentile};
use proptest::prelude::*;

proptest! {
    #[test]
    fn percentile_zero_is_minimum(values in prop::collection::vec(-1e6f64..1e6, 1..200)) {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        prop_assert_eq!(percentile(&values, 0.0), min);
    }

    #[test]
    fn percentile_one_is_maximum(values in prop::collection::vec(-1e6f64..1e6, 1..200)) {
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(percentile(&values, 1.0), max);
    }

    #[test]
    fn percentile_returns_an_element(
        values in prop::collection::vec(-1e6f64..1e6, 1..200),
        quantile in 0.0f64..=1.0,
    ) {
        let result = percentile(&values, quantile);
        prop_assert!(values.contains(&result));
    }

    #[test]
    fn vectors_are_pure_and_sized(
        length in 0usize..512,
        key in "[a-z0-9:-]{0,40}",
        seed in any::<u64>(),
    ) {
        let first = build_vector(length, &key, seed);
        let second = build_vector(length, &key, seed);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), length);
        prop_assert!(first.iter().all(|v| (-1.0..1.0).contains(v)));
    }

    #[test]
    fn hashing_is_deterministic(value in ".{0,80}") {
        prop_assert_eq!(hash_string(&value), hash_string(&value));
    }
}
