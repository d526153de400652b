//! Budget line data types.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use fundline_shared::types::{AgreementId, BudgetLineId, CanId, lenient_decimal};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::trace;

use super::fees::{compute_fee_amount, compute_line_total};

/// Budget line status in the agreement lifecycle.
///
/// Lines move Draft → Planned → Executing → Obligated. `InReview` marks a
/// line whose status change is awaiting approval.
///
/// Deserialization is lenient: `null` reads as Draft, matching is
/// case-insensitive, and anything unrecognized reads as `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetLineStatus {
    /// Being drafted; not yet part of any spending figure.
    #[default]
    Draft,
    /// Planned for obligation.
    Planned,
    /// In execution with the procurement shop.
    Executing,
    /// Funds obligated.
    Obligated,
    /// Pending a change request review.
    InReview,
    /// Any status this engine does not recognize.
    Unknown,
}

impl BudgetLineStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Planned => "PLANNED",
            Self::Executing => "EXECUTING",
            Self::Obligated => "OBLIGATED",
            Self::InReview => "IN_REVIEW",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns the human-readable label used in tables and charts.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Planned => "Planned",
            Self::Executing => "Executing",
            Self::Obligated => "Obligated",
            Self::InReview => "In Review",
            Self::Unknown => "Unknown",
        }
    }

    /// Parses a status from its wire form, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "DRAFT" => Some(Self::Draft),
            "PLANNED" => Some(Self::Planned),
            "EXECUTING" | "IN_EXECUTION" => Some(Self::Executing),
            "OBLIGATED" => Some(Self::Obligated),
            "IN_REVIEW" => Some(Self::InReview),
            _ => None,
        }
    }

    /// Returns true if lines in this status count toward spending.
    ///
    /// Only Planned, Executing, and Obligated lines are spending. Draft and
    /// In Review lines never are.
    #[must_use]
    pub fn is_spending(&self) -> bool {
        matches!(self, Self::Planned | Self::Executing | Self::Obligated)
    }
}

impl fmt::Display for BudgetLineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for BudgetLineStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let status = match Value::deserialize(deserializer)? {
            Value::Null => Self::Draft,
            Value::String(raw) => Self::parse(&raw).unwrap_or_else(|| {
                trace!(status = %raw, "unrecognized budget line status");
                Self::Unknown
            }),
            other => {
                trace!(status = %other, "non-string budget line status");
                Self::Unknown
            }
        };
        Ok(status)
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Agreement a budget line belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementRef {
    /// Agreement ID.
    #[serde(default)]
    pub id: Option<AgreementId>,
    /// Agreement name.
    #[serde(default)]
    pub name: Option<String>,
    /// Agreement type (e.g. "CONTRACT", "GRANT").
    #[serde(default)]
    pub agreement_type: Option<String>,
}

impl AgreementRef {
    /// Returns the trimmed name, or `None` when missing or blank.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// CAN funding a budget line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanRef {
    /// CAN ID.
    pub id: CanId,
    /// CAN number shown to users.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A budget line item as delivered by the REST layer.
///
/// Numeric fields tolerate `null` and malformed values; both read as zero
/// in every calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Budget line ID.
    pub id: BudgetLineId,
    /// Base amount before fees.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub amount: Option<Decimal>,
    /// Procurement shop fee as a fraction (0.05 = 5%).
    #[serde(
        default,
        alias = "fee_percentage",
        deserialize_with = "lenient_decimal"
    )]
    pub proc_shop_fee_percentage: Option<Decimal>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: BudgetLineStatus,
    /// Whether a change request on this line is awaiting review.
    #[serde(default, deserialize_with = "null_as_false")]
    pub in_review: bool,
    /// Fiscal year the line is planned for.
    #[serde(default)]
    pub fiscal_year: Option<i32>,
    /// Creation timestamp (ISO-8601), used for ordering only.
    #[serde(default)]
    pub created_on: Option<String>,
    /// Linked agreement.
    #[serde(default)]
    pub agreement: Option<AgreementRef>,
    /// Funding CAN.
    #[serde(default)]
    pub can: Option<CanRef>,
}

impl BudgetLine {
    /// Creates a line with an amount and status and no other data.
    #[must_use]
    pub fn new(id: i64, amount: impl Into<Option<Decimal>>, status: BudgetLineStatus) -> Self {
        Self {
            id: BudgetLineId::new(id),
            amount: amount.into(),
            status,
            ..Self::default()
        }
    }

    /// Sets the procurement shop fee rate.
    #[must_use]
    pub fn with_fee(mut self, fee_percentage: impl Into<Option<Decimal>>) -> Self {
        self.proc_shop_fee_percentage = fee_percentage.into();
        self
    }

    /// Sets the fiscal year.
    #[must_use]
    pub fn with_fiscal_year(mut self, fiscal_year: i32) -> Self {
        self.fiscal_year = Some(fiscal_year);
        self
    }

    /// Links the line to an agreement.
    #[must_use]
    pub fn with_agreement(mut self, agreement: AgreementRef) -> Self {
        self.agreement = Some(agreement);
        self
    }

    /// Links the line to a CAN.
    #[must_use]
    pub fn with_can(mut self, can: CanRef) -> Self {
        self.can = Some(can);
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn with_created_on(mut self, created_on: impl Into<String>) -> Self {
        self.created_on = Some(created_on.into());
        self
    }

    /// Status used for classification.
    ///
    /// A line with a pending change request reads as `InReview` regardless
    /// of its stored status.
    #[must_use]
    pub fn effective_status(&self) -> BudgetLineStatus {
        if self.in_review {
            BudgetLineStatus::InReview
        } else {
            self.status
        }
    }

    /// Procurement shop fee for this line, unrounded.
    #[must_use]
    pub fn fee_amount(&self) -> Decimal {
        compute_fee_amount(self.amount, self.proc_shop_fee_percentage)
    }

    /// Amount plus procurement shop fee.
    #[must_use]
    pub fn total(&self) -> Decimal {
        compute_line_total(self.amount, self.fee_amount())
    }

    /// Parses `created_on` into a timestamp.
    ///
    /// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.f]` timestamp, or a
    /// bare date (read as midnight).
    #[must_use]
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        let raw = self.created_on.as_deref()?.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.naive_utc());
        }
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(ts);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    }
}
