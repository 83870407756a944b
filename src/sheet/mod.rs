//! Spreadsheet row codec and write-back reconciliation.
//!
//! Everything that touches the workbook layout lives here: the serial date
//! codec, the row parser, the month/year loader, the project directory and
//! the row writer that keeps one physical row per entry.

pub mod formula;
pub mod grid;
pub mod loader;
pub mod overview;
pub mod projects;
pub mod row;
pub mod serial;
pub mod workbook;
pub mod writer;

pub use grid::{SheetGrid, SheetHandle, cell_ref};
pub use loader::{Loaded, MonthLoad, YearLoad, load_month, load_workbook, load_year, spawn_load};
pub use overview::{fix_overview_formulas, quote_month_refs};
pub use projects::load_projects;
pub use row::{FieldWarning, ParsedRow, RowError, parse_row};
pub use workbook::Workbook;
pub use writer::{WriteReport, write_entries};

/// Column and row geometry of a month sheet.
///
/// Columns are 0-based offsets (A = 0), `start_row` is the number of header
/// rows, so the first day row is the 1-based row `start_row + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub start_row: u32,
    pub col_date: u32,
    pub col_day: u32,
    pub col_start: u32,
    pub col_end: u32,
    pub col_pause: u32,
    pub col_project: u32,
    pub col_description: u32,
    pub col_hours: u32,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            start_row: 6,
            col_date: 0,
            col_day: 1,
            col_start: 2,
            col_end: 3,
            col_pause: 4,
            col_project: 5,
            col_description: 8,
            col_hours: 9,
        }
    }
}

impl SheetLayout {
    /// 1-based number of the first row holding a day.
    pub fn first_data_row(&self) -> u32 {
        self.start_row + 1
    }

    /// Data columns the writer owns; everything else belongs to formulas.
    pub fn data_columns(&self) -> [u32; 5] {
        [
            self.col_start,
            self.col_end,
            self.col_pause,
            self.col_project,
            self.col_description,
        ]
    }
}

/// Cells of the summary sheet that reference month sheets by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewLayout {
    pub sheet: String,
    pub first_row: u32,
    pub last_row: u32,
    pub columns: Vec<String>,
}

impl Default for OverviewLayout {
    fn default() -> Self {
        Self {
            sheet: "Gesamt".to_string(),
            first_row: 4,
            last_row: 15,
            columns: vec!["F".to_string(), "G".to_string(), "H".to_string()],
        }
    }
}

/// Two-digit month sheet names, in calendar order.
pub fn month_sheet_names() -> Vec<String> {
    (1..=12).map(|m| format!("{m:02}")).collect()
}
