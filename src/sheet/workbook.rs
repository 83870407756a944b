//! Open workbook handle: load, enumerate sheets, read rows, save.

use crate::errors::{AppError, AppResult};
use crate::sheet::grid::SheetHandle;
use std::path::Path;
use tracing::info;
use umya_spreadsheet::Spreadsheet;

#[derive(Clone)]
pub struct Workbook {
    book: Spreadsheet,
}

impl Workbook {
    pub fn open(path: &Path) -> AppResult<Self> {
        info!(file = %path.display(), "opening workbook");
        let book = umya_spreadsheet::reader::xlsx::read(path)
            .map_err(|e| AppError::Workbook(format!("{}: {e}", path.display())))?;
        Ok(Self { book })
    }

    /// Wrap an in-memory spreadsheet (fixtures, dry runs).
    pub fn from_spreadsheet(book: Spreadsheet) -> Self {
        Self { book }
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.book
            .get_sheet_collection()
            .iter()
            .map(|s| s.get_name().to_string())
            .collect()
    }

    pub fn has_sheet(&self, name: &str) -> bool {
        self.book.get_sheet_by_name(name).is_some()
    }

    /// All rows of `sheet` as raw strings.
    ///
    /// A row with any content spans the sheet's used columns, so a formula
    /// cell without a cached result or an unfilled trailing column never
    /// shortens it. A row without content comes back empty.
    pub fn rows(&self, sheet: &str) -> AppResult<Vec<Vec<String>>> {
        let ws = self
            .book
            .get_sheet_by_name(sheet)
            .ok_or_else(|| AppError::SheetNotFound(sheet.to_string()))?;

        let last_col = ws.get_highest_column();
        let last_row = ws.get_highest_row();

        let rows = (1..=last_row)
            .map(|r| {
                let row: Vec<String> = (1..=last_col).map(|c| ws.get_value((c, r))).collect();
                if row.iter().all(|v| v.is_empty()) {
                    Vec::new()
                } else {
                    row
                }
            })
            .collect();

        Ok(rows)
    }

    pub fn sheet(&mut self, name: &str) -> AppResult<SheetHandle<'_>> {
        if !self.has_sheet(name) {
            return Err(AppError::SheetNotFound(name.to_string()));
        }
        Ok(SheetHandle::new(&mut self.book, name))
    }

    pub fn set_active_sheet(&mut self, name: &str) {
        if let Some(index) = self.sheet_names().iter().position(|n| n == name) {
            self.book.set_active_sheet(index as u32);
        }
    }

    pub fn save_as(&self, path: &Path) -> AppResult<()> {
        info!(file = %path.display(), "saving workbook");
        umya_spreadsheet::writer::xlsx::write(&self.book, path)
            .map_err(|e| AppError::Workbook(format!("{}: {e}", path.display())))
    }
}
