//! Report command handlers.
//!
//! Each handler turns a snapshot into rendered text. `main` owns the I/O.

use rust_decimal::Decimal;
use serde::Serialize;

use fundline_core::budget_line::{BudgetLine, sorted_by_created_on};
use fundline_core::counts::{ItemCount, agreement_types_count, can_counts, status_counts};
use fundline_core::draft::{AgreementDraft, DraftAction, DraftError, reduce_all};
use fundline_core::export::{BudgetLineExportRow, ExportError};
use fundline_core::funding::{
    FundingSummary, SeriesEntry, build_funding_summary, carry_forward_series,
    funding_received_series, is_over_budget, summary_status_series,
};
use fundline_core::totals::{
    FiscalYearTotals, LineTotals, StatusTotals, fiscal_year_totals, is_spending, sum_amounts, sum_fees,
    sum_totals,
};
use fundline_shared::types::{PageMeta, PageRequest};
use fundline_shared::{AppError, AppResult, OutputFormat};

use crate::input::Snapshot;
use crate::render;

/// Grouping key for `counts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CountBy {
    /// Effective budget line status.
    Status,
    /// Agreement type, one vote per distinct agreement.
    AgreementType,
    /// CAN display name.
    Can,
}

#[derive(Debug, Serialize)]
struct SummaryReport {
    summary: FundingSummary,
    status_series: [SeriesEntry; 4],
    received_series: [SeriesEntry; 2],
    carry_forward_series: [SeriesEntry; 2],
    over_budget: bool,
}

/// Funding summary card, chart series, and the over-budget flag.
pub fn summary(snapshot: &Snapshot, format: OutputFormat) -> AppResult<String> {
    let summary = build_funding_summary(&snapshot.funding, &snapshot.budget_lines);
    let report = SummaryReport {
        summary,
        status_series: summary_status_series(&summary),
        received_series: funding_received_series(&summary),
        carry_forward_series: carry_forward_series(&summary),
        over_budget: is_over_budget(summary.spending(), summary.total_funding),
    };

    match format {
        OutputFormat::Json => render::json(&report),
        OutputFormat::Table => {
            let mut rows: Vec<Vec<String>> = [
                ("Total Funding", summary.total_funding),
                ("Received", summary.received_funding),
                ("Carry-Forward", summary.carry_forward_funding),
                ("New Funding", summary.new_funding),
                ("Available", summary.available_funding),
            ]
            .into_iter()
            .map(|(label, value)| vec![label.to_string(), value.to_string(), String::new()])
            .collect();
            rows.extend(
                report
                    .status_series
                    .iter()
                    .map(|e| vec![e.label.clone(), e.value.to_string(), e.percent.clone()]),
            );
            let mut out = render::table(&["Funding", "Amount", "Percent"], &rows, &[1, 2]);
            if report.over_budget {
                out.push_str("\nOver budget\n");
            }
            Ok(out)
        }
    }
}

/// Group counts in first-seen order.
pub fn counts(snapshot: &Snapshot, by: CountBy, format: OutputFormat) -> AppResult<String> {
    let lines = &snapshot.budget_lines;
    let counts: Vec<ItemCount> = match by {
        CountBy::Status => status_counts(lines),
        CountBy::AgreementType => agreement_types_count(lines),
        CountBy::Can => can_counts(lines),
    };

    match format {
        OutputFormat::Json => render::json(&counts),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = counts
                .iter()
                .map(|c| vec![c.item_type.clone(), c.count.to_string()])
                .collect();
            Ok(render::table(&["Type", "Count"], &rows, &[1]))
        }
    }
}

#[derive(Debug, Serialize)]
struct TotalsReport {
    subtotal: Decimal,
    fees: Decimal,
    total: Decimal,
    by_status: StatusTotals,
    by_fiscal_year: Vec<FiscalYearTotals>,
}

/// Subtotal, fees, and total, optionally scoped to a fiscal year or spending.
pub fn totals(
    snapshot: &Snapshot,
    fiscal_year: Option<i32>,
    spending_only: bool,
    format: OutputFormat,
) -> AppResult<String> {
    let lines = &snapshot.budget_lines;
    let selected = |line: &BudgetLine| {
        fiscal_year.is_none_or(|year| line.fiscal_year == Some(year))
            && (!spending_only || is_spending(line))
    };
    let scoped: Vec<BudgetLine> = lines.iter().filter(|line| selected(line)).cloned().collect();

    let report = TotalsReport {
        subtotal: sum_amounts(lines, Some(&selected)),
        fees: sum_fees(lines, Some(&selected)),
        total: sum_totals(lines, Some(&selected)),
        by_status: StatusTotals::from_lines(&scoped),
        by_fiscal_year: fiscal_year_totals(lines, Some(&selected)),
    };

    match format {
        OutputFormat::Json => render::json(&report),
        OutputFormat::Table => {
            let mut rows: Vec<Vec<String>> = report
                .by_fiscal_year
                .iter()
                .map(|fy| {
                    vec![
                        fy.fiscal_year.map_or_else(|| "Unassigned".to_string(), |y| format!("FY {y}")),
                        fy.totals.subtotal.to_string(),
                        fy.totals.fees.to_string(),
                        fy.totals.total.to_string(),
                    ]
                })
                .collect();
            rows.push(vec![
                "All".to_string(),
                report.subtotal.to_string(),
                report.fees.to_string(),
                report.total.to_string(),
            ]);
            Ok(render::table(
                &["Fiscal Year", "Subtotal", "Fees", "Total"],
                &rows,
                &[1, 2, 3],
            ))
        }
    }
}

/// One page of budget lines, newest first.
pub fn lines(snapshot: &Snapshot, page: u32, per_page: u32, decimal_places: u32) -> String {
    let sorted = sorted_by_created_on(&snapshot.budget_lines);
    let response = PageRequest::new(page, per_page).page_of(&sorted);

    let rows: Vec<Vec<String>> = response
        .data
        .iter()
        .map(|line| {
            let row = BudgetLineExportRow::from_line(line, decimal_places);
            vec![
                row.id.to_string(),
                row.agreement,
                row.can,
                row.fiscal_year.map(|y| y.to_string()).unwrap_or_default(),
                row.status,
                row.amount,
                row.fee,
                row.total,
            ]
        })
        .collect();

    let mut out = render::table(
        &["ID", "Agreement", "CAN", "FY", "Status", "Amount", "Fee", "Total"],
        &rows,
        &[5, 6, 7],
    );
    out.push_str(&page_footer(&response.meta));
    out
}

#[derive(Debug, Serialize)]
struct DraftReport {
    draft: AgreementDraft,
    totals: LineTotals,
}

/// Replays a JSON array of draft actions from an empty draft.
pub fn draft(actions_json: &str) -> AppResult<String> {
    let actions: Vec<DraftAction> = serde_json::from_str(actions_json)?;
    let draft = reduce_all(&AgreementDraft::default(), actions).map_err(draft_failure)?;

    render::json(&DraftReport {
        totals: draft.totals(),
        draft,
    })
}

fn draft_failure(err: DraftError) -> AppError {
    AppError::InvalidInput(format!("{}: {err}", err.error_code()))
}

/// Maps an export failure onto the CLI error type.
pub fn export_failure(err: ExportError) -> AppError {
    AppError::Export(format!("{}: {err}", err.error_code()))
}

fn page_footer(meta: &PageMeta) -> String {
    format!(
        "\nPage {} of {} ({} lines)\n",
        meta.page, meta.total_pages, meta.total
    )
}
