//! Group-by counters for budget line types and statuses.
//!
//! # Modules
//!
//! - `counter` - Generic first-seen-order counter over a key accessor
//! - `agreement` - Agreement-type and CAN counts built on the counter

pub mod agreement;
pub mod counter;

#[cfg(test)]
mod counter_props;

pub use agreement::{agreement_types_count, can_counts, status_counts};
pub use counter::{ItemCount, MaybeKey, types_counts};
