//! Funding summary and chart series projection.
//!
//! Combines funding figures computed server-side (total, received,
//! carry-forward) with locally derived spending to feed budget summary
//! cards and donut charts.

pub mod projection;
pub mod types;

#[cfg(test)]
mod projection_props;
#[cfg(test)]
mod tests;

pub use projection::{
    build_budget_status_series, build_funding_summary, calculate_percent, carry_forward_series,
    funding_received_series, is_over_budget, percent_label, summary_status_series,
};
pub use types::{FundingFigures, FundingSummary, SeriesEntry};
