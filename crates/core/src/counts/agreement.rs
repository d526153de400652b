//! Counts derived from budget line relations.

use std::collections::HashSet;

use crate::budget_line::{AgreementRef, BudgetLine};

use super::counter::{ItemCount, MaybeKey, types_counts};

/// Counts agreements by type across a set of budget lines.
///
/// Lines without an agreement, and agreements without a name, are skipped.
/// Agreements are de-duplicated by name before counting (first occurrence
/// wins), so two lines pointing at "the same" agreement through different
/// surrogate ids count once.
#[must_use]
pub fn agreement_types_count(lines: &[BudgetLine]) -> Vec<ItemCount> {
    let mut seen_names = HashSet::new();
    let unique: Vec<&AgreementRef> = lines
        .iter()
        .filter_map(|line| line.agreement.as_ref())
        .filter(|agreement| {
            agreement
                .display_name()
                .is_some_and(|name| seen_names.insert(name.to_owned()))
        })
        .collect();

    types_counts(unique, |agreement: &AgreementRef| {
        MaybeKey(agreement.agreement_type.clone())
    })
}

/// Counts budget lines per effective status, in first-seen order.
#[must_use]
pub fn status_counts(lines: &[BudgetLine]) -> Vec<ItemCount> {
    types_counts(lines, |line: &BudgetLine| line.effective_status().as_str())
}

/// Counts budget lines per funding CAN.
///
/// Keys are the CAN display name, falling back to its id. Lines without a
/// CAN are skipped.
#[must_use]
pub fn can_counts(lines: &[BudgetLine]) -> Vec<ItemCount> {
    let funded = lines.iter().filter_map(|line| line.can.as_ref());
    types_counts(funded, |can| {
        can.display_name
            .clone()
            .unwrap_or_else(|| can.id.to_string())
    })
}
