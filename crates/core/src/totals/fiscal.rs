//! Per-fiscal-year breakdown.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::budget_line::BudgetLine;

use super::aggregate::LinePredicate;
use super::status::LineTotals;

/// Totals for one fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYearTotals {
    /// Fiscal year, or `None` for lines not yet assigned one.
    pub fiscal_year: Option<i32>,
    /// Totals for lines in that year.
    pub totals: LineTotals,
}

/// Groups lines by fiscal year, oldest year first.
///
/// Lines without a fiscal year are reported last under `None`. Years with
/// no matching lines are omitted.
#[must_use]
pub fn fiscal_year_totals(
    lines: &[BudgetLine],
    predicate: Option<LinePredicate<'_>>,
) -> Vec<FiscalYearTotals> {
    let mut by_year: BTreeMap<i32, LineTotals> = BTreeMap::new();
    let mut unassigned: Option<LineTotals> = None;

    for line in lines.iter().filter(|&line| predicate.is_none_or(|keep| keep(line))) {
        let bucket = match line.fiscal_year {
            Some(year) => by_year.entry(year).or_default(),
            None => unassigned.get_or_insert_with(LineTotals::default),
        };
        bucket.add_line(line);
    }

    by_year
        .into_iter()
        .map(|(year, totals)| FiscalYearTotals {
            fiscal_year: Some(year),
            totals,
        })
        .chain(unassigned.map(|totals| FiscalYearTotals {
            fiscal_year: None,
            totals,
        }))
        .collect()
}
