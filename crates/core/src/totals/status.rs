//! Per-status breakdown computed in one pass.

use fundline_shared::types::coerce_numeric;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget_line::{BudgetLine, BudgetLineStatus};

/// Subtotal, fees, and total for a group of lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTotals {
    /// Sum of base amounts.
    pub subtotal: Decimal,
    /// Sum of procurement shop fees.
    pub fees: Decimal,
    /// Sum of fee-inclusive totals.
    pub total: Decimal,
    /// Number of lines in the group.
    pub count: usize,
}

impl LineTotals {
    /// Totals over every line in `lines`.
    #[must_use]
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a BudgetLine>) -> Self {
        let mut totals = Self::default();
        for line in lines {
            totals.add_line(line);
        }
        totals
    }

    /// Folds one line into the totals.
    pub fn add_line(&mut self, line: &BudgetLine) {
        self.subtotal = self.subtotal.saturating_add(coerce_numeric(line.amount));
        self.fees = self.fees.saturating_add(line.fee_amount());
        self.total = self.total.saturating_add(line.total());
        self.count += 1;
    }

    /// Combines two groups.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            subtotal: self.subtotal.saturating_add(other.subtotal),
            fees: self.fees.saturating_add(other.fees),
            total: self.total.saturating_add(other.total),
            count: self.count + other.count,
        }
    }
}

/// Totals for each effective status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTotals {
    /// Draft lines.
    pub draft: LineTotals,
    /// Planned lines.
    pub planned: LineTotals,
    /// Executing lines.
    pub executing: LineTotals,
    /// Obligated lines.
    pub obligated: LineTotals,
    /// Lines pending review.
    pub in_review: LineTotals,
    /// Lines with an unrecognized status.
    pub unknown: LineTotals,
}

impl StatusTotals {
    /// Buckets every line by effective status.
    #[must_use]
    pub fn from_lines(lines: &[BudgetLine]) -> Self {
        let mut totals = Self::default();
        for line in lines {
            totals.bucket_mut(line.effective_status()).add_line(line);
        }
        totals
    }

    /// Totals for one status.
    #[must_use]
    pub fn get(&self, status: BudgetLineStatus) -> &LineTotals {
        match status {
            BudgetLineStatus::Draft => &self.draft,
            BudgetLineStatus::Planned => &self.planned,
            BudgetLineStatus::Executing => &self.executing,
            BudgetLineStatus::Obligated => &self.obligated,
            BudgetLineStatus::InReview => &self.in_review,
            BudgetLineStatus::Unknown => &self.unknown,
        }
    }

    /// Planned + Executing + Obligated.
    #[must_use]
    pub fn spending(&self) -> LineTotals {
        self.planned.merge(self.executing).merge(self.obligated)
    }

    fn bucket_mut(&mut self, status: BudgetLineStatus) -> &mut LineTotals {
        match status {
            BudgetLineStatus::Draft => &mut self.draft,
            BudgetLineStatus::Planned => &mut self.planned,
            BudgetLineStatus::Executing => &mut self.executing,
            BudgetLineStatus::Obligated => &mut self.obligated,
            BudgetLineStatus::InReview => &mut self.in_review,
            BudgetLineStatus::Unknown => &mut self.unknown,
        }
    }
}
