//! Property-based tests for the group-by counter.

use std::collections::HashSet;

use proptest::prelude::*;

use super::counter::types_counts;

/// Keys drawn from a small alphabet so groups actually collide.
fn arb_keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-E]", 0..64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Counting twice over the same input gives the same result.
    #[test]
    fn prop_counts_are_idempotent(keys in arb_keys()) {
        let first = types_counts(&keys, String::clone);
        let second = types_counts(&keys, String::clone);
        prop_assert_eq!(first, second);
    }

    /// Every item is counted exactly once.
    #[test]
    fn prop_counts_sum_to_len(keys in arb_keys()) {
        let total: usize = types_counts(&keys, String::clone).iter().map(|c| c.count).sum();
        prop_assert_eq!(total, keys.len());
    }

    /// Output order is the order keys were first seen.
    #[test]
    fn prop_order_is_first_seen(keys in arb_keys()) {
        let mut seen = HashSet::new();
        let expected: Vec<&String> = keys.iter().filter(|k| seen.insert(*k)).collect();

        let counts = types_counts(&keys, String::clone);
        let actual: Vec<&String> = counts.iter().map(|c| &c.item_type).collect();

        prop_assert_eq!(actual, expected);
    }

    /// No group is ever reported with a zero count.
    #[test]
    fn prop_no_empty_groups(keys in arb_keys()) {
        prop_assert!(types_counts(&keys, String::clone).iter().all(|c| c.count > 0));
    }
}
