//! Funding projection for summary cards and charts.

use fundline_shared::types::round_half_up;
use rust_decimal::Decimal;
use tracing::debug;

use crate::budget_line::{BudgetLine, BudgetLineStatus};
use crate::totals::StatusTotals;

use super::types::{FundingFigures, FundingSummary, SeriesEntry};

/// Whole-number percentage of `part` in `whole`.
///
/// Returns zero when `whole` is zero, so callers never see a division error.
///
/// ```
/// use rust_decimal_macros::dec;
/// use fundline_core::funding::calculate_percent;
///
/// assert_eq!(calculate_percent(dec!(1), dec!(3)), dec!(33));
/// assert_eq!(calculate_percent(dec!(250), dec!(0)), dec!(0));
/// ```
#[must_use]
pub fn calculate_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.saturating_mul(Decimal::ONE_HUNDRED)
        .checked_div(whole)
        .map_or(Decimal::ZERO, round_half_up)
}

/// `calculate_percent` formatted for a legend, e.g. `"42%"`.
#[must_use]
pub fn percent_label(part: Decimal, whole: Decimal) -> String {
    format!("{}%", calculate_percent(part, whole))
}

fn entry(label: &str, amount: Decimal, whole: Decimal) -> SeriesEntry {
    SeriesEntry {
        label: label.to_string(),
        value: round_half_up(amount),
        percent: percent_label(amount, whole),
    }
}

/// Budget status donut series: Draft, Planned, Executing, Obligated.
///
/// Percentages are relative to `total_funding`. Values are rounded to whole
/// dollars because charts size slices proportionally to them.
#[must_use]
pub fn build_budget_status_series(
    total_funding: Decimal,
    draft: Decimal,
    planned: Decimal,
    executing: Decimal,
    obligated: Decimal,
) -> [SeriesEntry; 4] {
    [
        entry(BudgetLineStatus::Draft.label(), draft, total_funding),
        entry(BudgetLineStatus::Planned.label(), planned, total_funding),
        entry(BudgetLineStatus::Executing.label(), executing, total_funding),
        entry(BudgetLineStatus::Obligated.label(), obligated, total_funding),
    ]
}

/// Budget status series taken straight from a summary.
#[must_use]
pub fn summary_status_series(summary: &FundingSummary) -> [SeriesEntry; 4] {
    build_budget_status_series(
        summary.total_funding,
        summary.in_draft_funding,
        summary.planned_funding,
        summary.in_execution_funding,
        summary.obligated_funding,
    )
}

/// True when spending strictly exceeds funding. Equal is not over budget.
#[must_use]
pub fn is_over_budget(total_spending: Decimal, total_funding: Decimal) -> bool {
    let over = total_spending > total_funding;
    if over {
        debug!(%total_spending, %total_funding, "spending exceeds funding");
    }
    over
}

/// Combines upstream funding figures with fee-inclusive status totals.
///
/// `available_funding` is total funding minus Planned, Obligated, and
/// Executing totals. Draft and In Review lines do not reduce it.
#[must_use]
pub fn build_funding_summary(figures: &FundingFigures, lines: &[BudgetLine]) -> FundingSummary {
    let totals = StatusTotals::from_lines(lines);
    let spending = totals.spending().total;

    let summary = FundingSummary {
        total_funding: figures.total_funding,
        received_funding: figures.received_funding,
        carry_forward_funding: figures.carry_forward_funding,
        new_funding: figures
            .total_funding
            .saturating_sub(figures.carry_forward_funding),
        planned_funding: totals.planned.total,
        obligated_funding: totals.obligated.total,
        in_execution_funding: totals.executing.total,
        in_draft_funding: totals.draft.total,
        available_funding: figures.total_funding.saturating_sub(spending),
    };

    debug!(
        lines = lines.len(),
        total = %summary.total_funding,
        available = %summary.available_funding,
        "built funding summary"
    );
    summary
}

/// Received vs. still-expected funding.
#[must_use]
pub fn funding_received_series(summary: &FundingSummary) -> [SeriesEntry; 2] {
    let expected = summary
        .total_funding
        .saturating_sub(summary.received_funding);
    [
        entry("Funding Received", summary.received_funding, summary.total_funding),
        entry("Funding Expected", expected, summary.total_funding),
    ]
}

/// Carry-forward vs. new funding.
#[must_use]
pub fn carry_forward_series(summary: &FundingSummary) -> [SeriesEntry; 2] {
    [
        entry(
            "Carry-Forward",
            summary.carry_forward_funding,
            summary.total_funding,
        ),
        entry("New Funding", summary.new_funding, summary.total_funding),
    ]
}
