// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::xlsx::export_xlsx;
use crate::models::Year;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the loaded entries.
    ///
    /// - `month`: `None` exports the whole year, `Some(m)` only sheet `m`
    pub fn export(
        year: &Year,
        format: ExportFormat,
        file: &str,
        month: Option<u32>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows = Self::collect(year, month)?;
        if rows.is_empty() {
            warning("No entries found for the selected range.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(rows.len())
    }

    /// Flatten workdays of the selected month(s), in sheet order.
    pub fn collect(year: &Year, month: Option<u32>) -> AppResult<Vec<EntryExport>> {
        let rows = match month {
            Some(m) => year
                .month(m)
                .ok_or_else(|| AppError::InvalidMonth(m.to_string()))?
                .entries()
                .filter_map(EntryExport::from_entry)
                .collect(),
            None => year.entries().filter_map(EntryExport::from_entry).collect(),
        };
        Ok(rows)
    }
}
