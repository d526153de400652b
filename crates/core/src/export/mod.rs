//! CSV export of budget lines.
//!
//! Rows carry plain decimals. Currency symbols and thousands separators are
//! left to whatever opens the file.

pub mod error;
pub mod rows;

#[cfg(test)]
mod tests;

pub use error::ExportError;
pub use rows::{BudgetLineExportRow, format_amount, write_budget_lines_csv};
