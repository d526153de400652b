//! Funding data types.

use fundline_shared::types::lenient_decimal_or_zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Funding figures supplied by the upstream service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingFigures {
    /// Total funding available to the CAN or portfolio.
    #[serde(default, deserialize_with = "lenient_decimal_or_zero")]
    pub total_funding: Decimal,
    /// Funding actually received so far.
    #[serde(default, deserialize_with = "lenient_decimal_or_zero")]
    pub received_funding: Decimal,
    /// Funding carried forward from prior fiscal years.
    #[serde(default, deserialize_with = "lenient_decimal_or_zero")]
    pub carry_forward_funding: Decimal,
}

/// Funding picture for a budget summary card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingSummary {
    /// Total funding.
    pub total_funding: Decimal,
    /// Funding received.
    pub received_funding: Decimal,
    /// Funding carried forward.
    pub carry_forward_funding: Decimal,
    /// Funding new this year (total - carry-forward).
    pub new_funding: Decimal,
    /// Fee-inclusive total of Planned lines.
    pub planned_funding: Decimal,
    /// Fee-inclusive total of Obligated lines.
    pub obligated_funding: Decimal,
    /// Fee-inclusive total of Executing lines.
    pub in_execution_funding: Decimal,
    /// Fee-inclusive total of Draft lines.
    pub in_draft_funding: Decimal,
    /// Total funding minus Planned, Obligated, and Executing.
    pub available_funding: Decimal,
}

impl FundingSummary {
    /// Planned + Obligated + Executing.
    #[must_use]
    pub fn spending(&self) -> Decimal {
        self.planned_funding
            .saturating_add(self.obligated_funding)
            .saturating_add(self.in_execution_funding)
    }
}

/// One slice or point of a chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesEntry {
    /// Legend label.
    pub label: String,
    /// Value rounded to whole dollars.
    pub value: Decimal,
    /// Share of the whole, formatted like `"42%"`.
    pub percent: String,
}
