//! Export error types.

use thiserror::Error;

/// Errors raised while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Row could not be encoded.
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// Destination could not be written.
    #[error("Export write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Get error code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Csv(_) => "EXPORT_ENCODING_FAILED",
            Self::Io(_) => "EXPORT_WRITE_FAILED",
        }
    }
}
