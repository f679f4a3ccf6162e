//! Host spreadsheet collaborators.

use std::collections::HashMap;

/// Writes a corrected string back into a cell.
///
/// Best-effort contract: a sheet or cell that can no longer be resolved is
/// skipped without error, since the target may have been closed or renamed
/// while the suggestion dialog was open.
pub trait CellWriter {
    fn write_back(&mut self, sheet_id: &str, cell_address: &str, text: &str);
}

/// In-memory workbook keyed by sheet identifier and A1-style cell address.
/// Used in tests and by hosts without a live document.
#[derive(Debug, Default)]
pub struct MemoryWorkbook {
    sheets: HashMap<String, HashMap<String, String>>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sheet(&mut self, sheet_id: impl Into<String>) {
        self.sheets.entry(sheet_id.into()).or_default();
    }

    pub fn set_cell(
        &mut self,
        sheet_id: impl Into<String>,
        cell_address: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.sheets
            .entry(sheet_id.into())
            .or_default()
            .insert(cell_address.into(), text.into());
    }

    pub fn cell(&self, sheet_id: &str, cell_address: &str) -> Option<&str> {
        self.sheets
            .get(sheet_id)
            .and_then(|cells| cells.get(cell_address))
            .map(|s| s.as_str())
    }
}

/// A1-style address: one or more column letters followed by a row number.
fn valid_address(cell_address: &str) -> bool {
    let letters: String = cell_address
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    let rest = &cell_address[letters.len()..];
    !letters.is_empty() && !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
}

impl CellWriter for MemoryWorkbook {
    fn write_back(&mut self, sheet_id: &str, cell_address: &str, text: &str) {
        let Some(cells) = self.sheets.get_mut(sheet_id) else {
            tracing::warn!(sheet_id, "Write-back sheet not resolvable, skipping");
            return;
        };
        if !valid_address(cell_address) {
            tracing::warn!(cell_address, "Write-back cell not resolvable, skipping");
            return;
        }
        cells.insert(cell_address.to_string(), text.to_string());
    }
}
