//! Property-based tests for aggregate totals.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::budget_line::{BudgetLine, BudgetLineStatus};

use super::aggregate::{sum_amounts, sum_fees, sum_totals};
use super::filters::is_spending;
use super::status::StatusTotals;

fn arb_status() -> impl Strategy<Value = BudgetLineStatus> {
    prop_oneof![
        Just(BudgetLineStatus::Draft),
        Just(BudgetLineStatus::Planned),
        Just(BudgetLineStatus::Executing),
        Just(BudgetLineStatus::Obligated),
        Just(BudgetLineStatus::InReview),
    ]
}

/// Cents-precision amounts, sometimes missing.
fn arb_amount() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::of((-100_000_000i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2)))
}

/// Fee rates between 0% and 10% with three decimal places, sometimes missing.
fn arb_fee() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::of((0i64..=100).prop_map(|rate| Decimal::new(rate, 3)))
}

fn arb_lines() -> impl Strategy<Value = Vec<BudgetLine>> {
    prop::collection::vec((arb_amount(), arb_fee(), arb_status()), 0..40).prop_map(|rows| {
        rows.into_iter()
            .zip(1i64..)
            .map(|((amount, fee, status), id)| BudgetLine::new(id, amount, status).with_fee(fee))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// No predicate means every line is included.
    #[test]
    fn prop_no_predicate_includes_all(lines in arb_lines()) {
        prop_assert_eq!(
            sum_amounts(&lines, None),
            sum_amounts(&lines, Some(&|_: &BudgetLine| true))
        );
    }

    /// Totals are the sum of amounts and fees.
    #[test]
    fn prop_totals_are_amounts_plus_fees(lines in arb_lines()) {
        prop_assert_eq!(
            sum_totals(&lines, None),
            sum_amounts(&lines, None) + sum_fees(&lines, None)
        );
    }

    /// Spending never includes Draft or In Review amounts.
    #[test]
    fn prop_spending_matches_status_buckets(lines in arb_lines()) {
        let buckets = StatusTotals::from_lines(&lines);
        prop_assert_eq!(sum_totals(&lines, Some(&is_spending)), buckets.spending().total);
        prop_assert_eq!(
            sum_totals(&lines, None),
            buckets.spending().total + buckets.draft.total + buckets.in_review.total
        );
    }
}
