//! Line predicates for scoping aggregates.
//!
//! All predicates classify by `BudgetLine::effective_status`, so a line with
//! a pending change request is never mistaken for spending.

use crate::budget_line::{BudgetLine, BudgetLineStatus};

/// Planned, Executing, or Obligated. Draft and In Review lines are excluded.
pub fn is_spending(line: &BudgetLine) -> bool {
    line.effective_status().is_spending()
}

/// Anything except Draft.
pub fn not_draft(line: &BudgetLine) -> bool {
    line.effective_status() != BudgetLineStatus::Draft
}

/// Lines whose effective status equals `status`.
pub fn has_status(status: BudgetLineStatus) -> impl Fn(&BudgetLine) -> bool {
    move |line| line.effective_status() == status
}

/// Lines planned for `fiscal_year`. Lines without a fiscal year never match.
pub fn in_fiscal_year(fiscal_year: i32) -> impl Fn(&BudgetLine) -> bool {
    move |line| line.fiscal_year == Some(fiscal_year)
}
