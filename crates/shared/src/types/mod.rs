//! Common types used across the application.

pub mod id;
pub mod numeric;
pub mod pagination;

pub use id::*;
pub use numeric::{
    coerce_numeric, coerce_numeric_or, lenient_decimal, lenient_decimal_or_zero, parse_numeric,
    round_half_up,
};
pub use pagination::{PageMeta, PageRequest, PageResponse};
