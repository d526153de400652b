//! Predicate-scoped sums over budget lines.

use fundline_shared::types::coerce_numeric;
use rust_decimal::Decimal;

use crate::budget_line::BudgetLine;

use super::filters::is_spending;

/// Optional filter applied before summing. `None` includes every line.
pub type LinePredicate<'p> = &'p dyn Fn(&BudgetLine) -> bool;

/// Sums base amounts, treating missing amounts as zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use fundline_core::budget_line::{BudgetLine, BudgetLineStatus};
/// use fundline_core::totals::{is_spending, sum_amounts};
///
/// let lines = vec![
///     BudgetLine::new(1, dec!(1000), BudgetLineStatus::Planned),
///     BudgetLine::new(2, dec!(250), BudgetLineStatus::Draft),
/// ];
/// assert_eq!(sum_amounts(&lines, None), dec!(1250));
/// assert_eq!(sum_amounts(&lines, Some(&is_spending)), dec!(1000));
/// ```
#[must_use]
pub fn sum_amounts(lines: &[BudgetLine], predicate: Option<LinePredicate<'_>>) -> Decimal {
    sum_by(lines, predicate, |line| coerce_numeric(line.amount))
}

/// Sums procurement shop fees.
#[must_use]
pub fn sum_fees(lines: &[BudgetLine], predicate: Option<LinePredicate<'_>>) -> Decimal {
    sum_by(lines, predicate, BudgetLine::fee_amount)
}

/// Sums fee-inclusive line totals.
///
/// Summed per line, so it always equals `sum_amounts + sum_fees` over the
/// same lines.
#[must_use]
pub fn sum_totals(lines: &[BudgetLine], predicate: Option<LinePredicate<'_>>) -> Decimal {
    sum_by(lines, predicate, BudgetLine::total)
}

/// Spending before fees: Planned, Executing, and Obligated amounts only.
#[must_use]
pub fn spending_subtotal(lines: &[BudgetLine]) -> Decimal {
    sum_amounts(lines, Some(&is_spending))
}

/// Spending including procurement shop fees.
#[must_use]
pub fn spending_total(lines: &[BudgetLine]) -> Decimal {
    sum_totals(lines, Some(&is_spending))
}

fn sum_by(
    lines: &[BudgetLine],
    predicate: Option<LinePredicate<'_>>,
    value: impl Fn(&BudgetLine) -> Decimal,
) -> Decimal {
    lines
        .iter()
        .filter(|&line| predicate.is_none_or(|keep| keep(line)))
        .map(value)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}
