//! Fee and total computation for a single budget line.
//!
//! Both functions are total: missing inputs read as zero and overflow
//! saturates instead of panicking. No rounding happens here; display
//! rounding belongs to the caller.

use fundline_shared::types::coerce_numeric;
use rust_decimal::Decimal;

/// Procurement shop fee for a base amount.
///
/// `fee_percentage` is a fraction (0.05 = 5%), not a whole-number percent.
///
/// ```
/// use rust_decimal_macros::dec;
/// use fundline_core::budget_line::compute_fee_amount;
///
/// assert_eq!(compute_fee_amount(dec!(1200), dec!(0.05)), dec!(60));
/// assert_eq!(compute_fee_amount(dec!(1200), None), dec!(0));
/// ```
#[must_use]
pub fn compute_fee_amount(
    amount: impl Into<Option<Decimal>>,
    fee_percentage: impl Into<Option<Decimal>>,
) -> Decimal {
    coerce_numeric(amount.into()).saturating_mul(coerce_numeric(fee_percentage.into()))
}

/// Amount plus fee.
#[must_use]
pub fn compute_line_total(
    amount: impl Into<Option<Decimal>>,
    fee_amount: impl Into<Option<Decimal>>,
) -> Decimal {
    coerce_numeric(amount.into()).saturating_add(coerce_numeric(fee_amount.into()))
}

/// Converts a fee fraction into a whole-number percent for display columns.
#[must_use]
pub fn fee_rate_as_percent(fee_percentage: impl Into<Option<Decimal>>) -> Decimal {
    coerce_numeric(fee_percentage.into())
        .saturating_mul(Decimal::ONE_HUNDRED)
        .normalize()
}
