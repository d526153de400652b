//! Display ordering for budget line tables.

use std::cmp::Ordering;

use super::types::BudgetLine;

/// Returns the lines newest first by `created_on`, leaving `lines` untouched.
///
/// Lines without a parseable timestamp go last. The sort is stable, so ties
/// keep their input order.
#[must_use]
pub fn sorted_by_created_on(lines: &[BudgetLine]) -> Vec<&BudgetLine> {
    let mut keyed: Vec<_> = lines.iter().map(|line| (line.created_at(), line)).collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, line)| line).collect()
}
