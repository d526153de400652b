//! Pure reducer for the agreement draft.

use rust_decimal::Decimal;
use tracing::trace;

use super::error::DraftError;
use super::types::{AgreementDraft, BudgetLineDraft, DraftAction};

/// Applies `action` to `state`, returning the next state.
///
/// `state` is never modified. On error the caller keeps the previous state.
///
/// # Errors
///
/// Returns `DraftError::EmptyAgreementName` for a blank name,
/// `DraftError::InvalidFeeRate` for a fee outside `0..=1`, and
/// `DraftError::LineNotFound` when updating or removing an unknown line.
pub fn reduce(state: &AgreementDraft, action: DraftAction) -> Result<AgreementDraft, DraftError> {
    trace!(action = action.name(), lines = state.budget_lines.len(), "reducing draft");
    let mut next = state.clone();

    match action {
        DraftAction::SetAgreementName(name) => {
            let name = name.trim();
            if name.is_empty() {
                return Err(DraftError::EmptyAgreementName);
            }
            next.name = name.to_string();
        }
        DraftAction::SetAgreementType(agreement_type) => {
            next.agreement_type = agreement_type;
        }
        DraftAction::SetProcShopFee(fee) => {
            if let Some(rate) = fee.filter(|rate| *rate < Decimal::ZERO || *rate > Decimal::ONE) {
                return Err(DraftError::InvalidFeeRate(rate));
            }
            next.proc_shop_fee_percentage = fee;
        }
        DraftAction::AddBudgetLine(input) => {
            next.budget_lines.push(BudgetLineDraft {
                temp_id: next.next_temp_id,
                input,
            });
            next.next_temp_id += 1;
        }
        DraftAction::UpdateBudgetLine { temp_id, input } => {
            let line = next
                .budget_lines
                .iter_mut()
                .find(|line| line.temp_id == temp_id)
                .ok_or(DraftError::LineNotFound(temp_id))?;
            line.input = input;
        }
        DraftAction::RemoveBudgetLine { temp_id } => {
            let before = next.budget_lines.len();
            next.budget_lines.retain(|line| line.temp_id != temp_id);
            if next.budget_lines.len() == before {
                return Err(DraftError::LineNotFound(temp_id));
            }
        }
        DraftAction::Reset => return Ok(AgreementDraft::default()),
    }

    Ok(next)
}

/// Folds a sequence of actions, stopping at the first failure.
///
/// # Errors
///
/// Returns the first `DraftError` raised by `reduce`.
pub fn reduce_all(
    state: &AgreementDraft,
    actions: impl IntoIterator<Item = DraftAction>,
) -> Result<AgreementDraft, DraftError> {
    actions
        .into_iter()
        .try_fold(state.clone(), |current, action| reduce(&current, action))
}
