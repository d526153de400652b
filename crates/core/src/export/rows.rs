//! Export row mapping and CSV writer.

use std::io;

use fundline_shared::types::coerce_numeric;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::debug;

use crate::budget_line::{BudgetLine, fee_rate_as_percent};

use super::error::ExportError;

/// One budget line as written to a spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetLineExportRow {
    /// Budget line ID.
    #[serde(rename = "BL ID #")]
    pub id: i64,
    /// Agreement name, blank when unlinked.
    #[serde(rename = "Agreement")]
    pub agreement: String,
    /// CAN display name, blank when unfunded.
    #[serde(rename = "CAN")]
    pub can: String,
    /// Fiscal year, blank when unassigned.
    #[serde(rename = "FY")]
    pub fiscal_year: Option<i32>,
    /// Effective status label.
    #[serde(rename = "Status")]
    pub status: String,
    /// Base amount.
    #[serde(rename = "Amount")]
    pub amount: String,
    /// Fee rate as a whole-number percent.
    #[serde(rename = "Fee Rate (%)")]
    pub fee_rate: String,
    /// Fee amount.
    #[serde(rename = "Fee")]
    pub fee: String,
    /// Amount plus fee.
    #[serde(rename = "Total")]
    pub total: String,
}

impl BudgetLineExportRow {
    /// Maps a budget line into an export row.
    #[must_use]
    pub fn from_line(line: &BudgetLine, decimal_places: u32) -> Self {
        Self {
            id: line.id.into_inner(),
            agreement: line
                .agreement
                .as_ref()
                .and_then(|agreement| agreement.display_name())
                .unwrap_or_default()
                .to_string(),
            can: line
                .can
                .as_ref()
                .map(|can| {
                    can.display_name
                        .clone()
                        .unwrap_or_else(|| can.id.to_string())
                })
                .unwrap_or_default(),
            fiscal_year: line.fiscal_year,
            status: line.effective_status().label().to_string(),
            amount: format_amount(coerce_numeric(line.amount), decimal_places),
            fee_rate: fee_rate_as_percent(line.proc_shop_fee_percentage).to_string(),
            fee: format_amount(line.fee_amount(), decimal_places),
            total: format_amount(line.total(), decimal_places),
        }
    }
}

/// Renders an amount with a fixed number of decimals, halves away from zero.
#[must_use]
pub fn format_amount(value: Decimal, decimal_places: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", decimal_places as usize, rounded)
}

/// Writes `lines` as CSV with a header row. Returns the number of data rows.
///
/// # Errors
///
/// Returns `ExportError` if a row cannot be encoded or the writer fails.
pub fn write_budget_lines_csv<W: io::Write>(
    lines: &[BudgetLine],
    decimal_places: u32,
    writer: W,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for line in lines {
        csv_writer.serialize(BudgetLineExportRow::from_line(line, decimal_places))?;
    }
    csv_writer.flush()?;

    debug!(rows = lines.len(), "wrote budget line export");
    Ok(lines.len())
}
