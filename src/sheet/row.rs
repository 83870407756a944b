//! Decoding of one raw sheet row into an [`Entry`].
//!
//! Column offsets, relative to the date column:
//!
//! | offset | content                      |
//! |--------|------------------------------|
//! | 0      | date (serial)                |
//! | 1      | weekday label ("Mo".."So")   |
//! | 2, 3   | start / end (day fraction)   |
//! | 4      | pause (day fraction)         |
//! | 5..=8  | project code, project, customer, description |
//! | 9      | worked hours (day fraction)  |
//! | 10..=12| vacation, sickness, note (optional) |

use crate::models::{Entry, EntryKind, WorkTimes};
use crate::sheet::serial::{
    fraction_to_clock_time, fraction_to_duration, midnight, serial_to_date,
};
use crate::utils::date::is_weekend_label;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use thiserror::Error;
use tracing::warn;

/// Cells a row must provide from the date column on (date .. worked hours).
pub const MIN_ROW_CELLS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row is empty")]
    Empty,

    #[error("row too short: {found} cells from the date column, {required} required")]
    Short { found: usize, required: usize },

    #[error("unreadable date cell: {0:?}")]
    BadDate(String),
}

/// A field that could not be decoded and fell back to its zero value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWarning {
    pub sheet: String,
    pub row_index: usize,
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub entry: Entry,
    pub warnings: Vec<FieldWarning>,
}

struct Fields<'a> {
    cells: &'a [String],
    sheet: &'a str,
    row_index: usize,
    warnings: Vec<FieldWarning>,
}

impl<'a> Fields<'a> {
    fn text(&self, offset: usize) -> String {
        self.cells
            .get(offset)
            .map(|c| c.trim().to_string())
            .unwrap_or_default()
    }

    fn raw(&self, offset: usize) -> &str {
        self.cells.get(offset).map(String::as_str).unwrap_or("")
    }

    fn warn(&mut self, field: &'static str, value: &str, message: String) {
        warn!(sheet = self.sheet, row = self.row_index, field, value, "{message}");
        self.warnings.push(FieldWarning {
            sheet: self.sheet.to_string(),
            row_index: self.row_index,
            field,
            value: value.to_string(),
            message,
        });
    }

    fn clock(&mut self, base: NaiveDateTime, offset: usize, field: &'static str) -> NaiveDateTime {
        let raw = self.raw(offset).to_string();
        fraction_to_clock_time(base, &raw).unwrap_or_else(|e| {
            self.warn(field, &raw, e.to_string());
            base
        })
    }

    fn duration(&mut self, offset: usize, field: &'static str) -> TimeDelta {
        let raw = self.raw(offset).to_string();
        fraction_to_duration(&raw).unwrap_or_else(|e| {
            self.warn(field, &raw, e.to_string());
            TimeDelta::zero()
        })
    }
}

/// Parse one row. `start_column` is the 0-based column of the date.
///
/// Weekend rows ("Sa"/"So") and rows without start and end time come back
/// as [`EntryKind::Placeholder`]; the caller decides whether to keep them.
pub fn parse_row(
    cells: &[String],
    sheet_name: &str,
    row_index: usize,
    start_column: usize,
) -> Result<ParsedRow, RowError> {
    if cells.is_empty() {
        return Err(RowError::Empty);
    }

    let row = cells.get(start_column..).unwrap_or(&[]);
    if row.len() < MIN_ROW_CELLS {
        return Err(RowError::Short {
            found: row.len(),
            required: MIN_ROW_CELLS,
        });
    }

    let mut fields = Fields {
        cells: row,
        sheet: sheet_name,
        row_index,
        warnings: Vec::new(),
    };

    let date: NaiveDate =
        serial_to_date(fields.raw(0)).map_err(|_| RowError::BadDate(fields.raw(0).to_string()))?;

    let day_label = fields.text(1);
    if day_label.is_empty() {
        fields.warn("day_label", "", "no day label provided".to_string());
    }

    let mut entry = Entry {
        sheet_name: sheet_name.to_string(),
        row_index,
        date,
        day_label,
        kind: EntryKind::Placeholder,
        raw_cells: cells.to_vec(),
    };

    let blank_times = fields.text(2).is_empty() && fields.text(3).is_empty();
    if is_weekend_label(&entry.day_label) || blank_times {
        return Ok(ParsedRow {
            entry,
            warnings: fields.warnings,
        });
    }

    let base = midnight(date);
    let mut work = WorkTimes::at(date);
    work.start = fields.clock(base, 2, "start");
    work.end = fields.clock(base, 3, "end");
    work.pause = fields.duration(4, "pause");
    work.project_code = fields.text(5);
    work.project_name = fields.text(6);
    work.customer = fields.text(7);
    work.description = fields.text(8);
    work.worked = fields.duration(9, "worked");

    // trailing columns are optional, a shorter row simply stops here
    if row.len() > 10 {
        work.vacation = fields.duration(10, "vacation");
    }
    if row.len() > 11 {
        work.sickness = fields.duration(11, "sickness");
    }
    if row.len() > 12 {
        work.note = fields.text(12);
    }

    entry.kind = EntryKind::Workday(work);

    Ok(ParsedRow {
        entry,
        warnings: fields.warnings,
    })
}
