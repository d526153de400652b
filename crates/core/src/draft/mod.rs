//! Agreement wizard draft state.
//!
//! # Modules
//!
//! - `types` - Draft state and actions
//! - `error` - Draft-specific error types
//! - `reducer` - Pure state transitions

pub mod error;
pub mod reducer;
pub mod types;


pub use error::DraftError;
pub use reducer::{reduce, reduce_all};
pub use types::{AgreementDraft, BudgetLineDraft, BudgetLineInput, DraftAction};
