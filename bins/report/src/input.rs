//! Snapshot loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use fundline_core::budget_line::BudgetLine;
use fundline_core::funding::FundingFigures;
use fundline_shared::AppResult;

/// Budget lines plus the funding figures they are measured against.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    /// Budget lines in source order.
    #[serde(default)]
    pub budget_lines: Vec<BudgetLine>,
    /// Funding figures; zeros when absent.
    #[serde(default)]
    pub funding: FundingFigures,
}

impl Snapshot {
    /// Parses a snapshot from JSON text.
    pub fn from_json(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a snapshot file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            lines = snapshot.budget_lines.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }
}
