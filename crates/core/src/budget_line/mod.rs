//! Budget line records, statuses, and single-line money math.

pub mod fees;
pub mod ordering;
pub mod types;


pub use fees::{compute_fee_amount, compute_line_total, fee_rate_as_percent};
pub use ordering::sorted_by_created_on;
pub use types::{AgreementRef, BudgetLine, BudgetLineStatus, CanRef};
