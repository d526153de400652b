//! Core budget-line metrics for Fundline.
//!
//! This crate contains pure business logic with ZERO network or storage
//! dependencies. Callers hand over budget line records that were already
//! fetched and deserialized; everything here is a synchronous computation
//! that never mutates its input.
//!
//! # Modules
//!
//! - `budget_line` - Budget line records, statuses, and fee math
//! - `counts` - Group-by counters for types and statuses
//! - `totals` - Subtotal, fee, and total roll-ups with status predicates
//! - `funding` - Funding summary and chart series projection
//! - `draft` - Agreement wizard draft state and its reducer
//! - `export` - CSV export rows for budget lines

pub mod budget_line;
pub mod counts;
pub mod draft;
pub mod export;
pub mod funding;
pub mod totals;
