//! Subtotal, fee, and total roll-ups across budget line collections.
//!
//! # Modules
//!
//! - `aggregate` - Predicate-scoped sums
//! - `filters` - Reusable line predicates, including the spending rule
//! - `status` - Single-pass per-status breakdown
//! - `fiscal` - Per-fiscal-year breakdown for trend charts

pub mod aggregate;
pub mod filters;
pub mod fiscal;
pub mod status;

#[cfg(test)]
mod aggregate_props;

pub use aggregate::{
    LinePredicate, spending_subtotal, spending_total, sum_amounts, sum_fees, sum_totals,
};
pub use filters::{has_status, in_fiscal_year, is_spending, not_draft};
pub use fiscal::{FiscalYearTotals, fiscal_year_totals};
pub use status::{LineTotals, StatusTotals};
