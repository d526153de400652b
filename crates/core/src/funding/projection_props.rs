//! Property-based tests for funding projection.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::projection::{build_budget_status_series, calculate_percent, is_over_budget};

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A zero whole never divides.
    #[test]
    fn prop_percent_of_zero_whole_is_zero(part in arb_amount()) {
        prop_assert_eq!(calculate_percent(part, Decimal::ZERO), Decimal::ZERO);
    }

    /// Percentages are always whole numbers.
    #[test]
    fn prop_percent_is_integral(part in arb_amount(), whole in arb_amount()) {
        let percent = calculate_percent(part, whole);
        prop_assert_eq!(percent, percent.trunc());
    }

    /// Over budget is exactly strict greater-than.
    #[test]
    fn prop_over_budget_is_strict(spending in arb_amount(), funding in arb_amount()) {
        prop_assert_eq!(is_over_budget(spending, funding), spending > funding);
        prop_assert!(!is_over_budget(funding, funding));
    }

    /// The status series always has four whole-dollar entries.
    #[test]
    fn prop_status_series_values_are_whole(
        total in arb_amount(),
        draft in arb_amount(),
        planned in arb_amount(),
        executing in arb_amount(),
        obligated in arb_amount(),
    ) {
        let series = build_budget_status_series(total, draft, planned, executing, obligated);
        prop_assert_eq!(series.len(), 4);
        for entry in &series {
            prop_assert_eq!(entry.value, entry.value.trunc());
            prop_assert!(entry.percent.ends_with('%'));
        }
    }
}
