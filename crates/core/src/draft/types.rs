//! Draft state for the agreement wizard.
//!
//! The wizard stages everything the user enters across its steps in one
//! explicit, serializable value. Steps read slices of it and hand actions to
//! `reduce`; nothing lives in ambient global state.

use fundline_shared::types::{BudgetLineId, CanId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget_line::{AgreementRef, BudgetLine, BudgetLineStatus, CanRef};
use crate::totals::LineTotals;

/// User-entered fields of one budget line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLineInput {
    /// Base amount.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Fiscal year.
    #[serde(default)]
    pub fiscal_year: Option<i32>,
    /// Funding CAN.
    #[serde(default)]
    pub can_id: Option<CanId>,
    /// Free-text comments.
    #[serde(default)]
    pub comments: Option<String>,
}

/// A budget line staged in the wizard, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLineDraft {
    /// Temporary id, unique within its draft.
    pub temp_id: u32,
    /// Entered fields.
    #[serde(flatten)]
    pub input: BudgetLineInput,
}

/// Everything staged by the agreement wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementDraft {
    /// Agreement name.
    pub name: String,
    /// Agreement type.
    pub agreement_type: Option<String>,
    /// Procurement shop fee rate applied to every line.
    pub proc_shop_fee_percentage: Option<Decimal>,
    /// Staged budget lines, in entry order.
    pub budget_lines: Vec<BudgetLineDraft>,
    /// Next temporary id to hand out.
    pub next_temp_id: u32,
}

impl AgreementDraft {
    /// Looks up a staged line by temporary id.
    #[must_use]
    pub fn line(&self, temp_id: u32) -> Option<&BudgetLineDraft> {
        self.budget_lines.iter().find(|line| line.temp_id == temp_id)
    }

    /// Staged lines as Draft budget lines carrying the agreement fee rate.
    #[must_use]
    pub fn to_budget_lines(&self) -> Vec<BudgetLine> {
        let agreement = AgreementRef {
            id: None,
            name: Some(self.name.clone()),
            agreement_type: self.agreement_type.clone(),
        };

        self.budget_lines
            .iter()
            .map(|draft| BudgetLine {
                id: BudgetLineId::new(i64::from(draft.temp_id)),
                amount: draft.input.amount,
                proc_shop_fee_percentage: self.proc_shop_fee_percentage,
                status: BudgetLineStatus::Draft,
                fiscal_year: draft.input.fiscal_year,
                agreement: Some(agreement.clone()),
                can: draft.input.can_id.map(|id| CanRef {
                    id,
                    display_name: None,
                }),
                ..BudgetLine::default()
            })
            .collect()
    }

    /// Subtotal, fees, and total for the review step.
    #[must_use]
    pub fn totals(&self) -> LineTotals {
        LineTotals::from_lines(&self.to_budget_lines())
    }
}

/// A wizard action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DraftAction {
    /// Set the agreement name.
    SetAgreementName(String),
    /// Set or clear the agreement type.
    SetAgreementType(Option<String>),
    /// Set or clear the procurement shop fee rate.
    SetProcShopFee(Option<Decimal>),
    /// Stage a new budget line.
    AddBudgetLine(BudgetLineInput),
    /// Replace the fields of a staged line.
    UpdateBudgetLine {
        /// Line to update.
        temp_id: u32,
        /// New fields.
        input: BudgetLineInput,
    },
    /// Drop a staged line.
    RemoveBudgetLine {
        /// Line to remove.
        temp_id: u32,
    },
    /// Discard the whole draft.
    Reset,
}

impl DraftAction {
    /// Short name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetAgreementName(_) => "set_agreement_name",
            Self::SetAgreementType(_) => "set_agreement_type",
            Self::SetProcShopFee(_) => "set_proc_shop_fee",
            Self::AddBudgetLine(_) => "add_budget_line",
            Self::UpdateBudgetLine { .. } => "update_budget_line",
            Self::RemoveBudgetLine { .. } => "remove_budget_line",
            Self::Reset => "reset",
        }
    }
}
