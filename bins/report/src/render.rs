//! Output rendering for report commands.

use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{CellAlignment, Table};
use serde::Serialize;

use fundline_shared::{AppError, AppResult};

/// Serializes `value` as pretty JSON.
pub fn json<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.to_string()))
}

/// Renders rows as a Markdown-style table.
///
/// Columns listed in `right_aligned` are right-aligned, for amounts.
pub fn table(headers: &[&str], rows: &[Vec<String>], right_aligned: &[usize]) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN).set_header(headers.to_vec());
    for row in rows {
        table.add_row(row);
    }
    for &index in right_aligned {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table.to_string()
}
