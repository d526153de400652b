//! Draft error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a wizard action cannot be applied to a draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// No staged budget line carries this temporary id.
    #[error("Budget line draft not found: {0}")]
    LineNotFound(u32),

    /// Fee rate is not a fraction between 0 and 1.
    #[error("Procurement shop fee rate must be between 0 and 1, got {0}")]
    InvalidFeeRate(Decimal),

    /// Agreement name is blank.
    #[error("Agreement name cannot be empty")]
    EmptyAgreementName,
}

impl DraftError {
    /// Returns the error code for client responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::LineNotFound(_) => "DRAFT_LINE_NOT_FOUND",
            Self::InvalidFeeRate(_) => "INVALID_FEE_RATE",
            Self::EmptyAgreementName => "EMPTY_AGREEMENT_NAME",
        }
    }
}
