//! Cell-level access to one sheet.
//!
//! The reconciler only needs a handful of operations, so it talks to this
//! trait instead of to the spreadsheet library.

use crate::sheet::formula::shift_rows;
use tracing::{debug, error};
use umya_spreadsheet::Spreadsheet;

pub trait SheetGrid {
    /// Raw cell value (cached result for formula cells). Missing cells are "".
    fn value(&self, addr: &str) -> String;
    fn formula(&self, addr: &str) -> String;
    fn set_number(&mut self, addr: &str, value: f64);
    fn set_text(&mut self, addr: &str, value: &str);
    fn set_formula(&mut self, addr: &str, formula: &str);
    fn clear(&mut self, addr: &str);
    /// Insert a copy of `row` (values, styles, formulas) directly below it.
    fn duplicate_row(&mut self, row: u32);
    fn remove_row(&mut self, row: u32);
}

/// "C12"-style address from a 0-based column and a 1-based row.
pub fn cell_ref(col: u32, row: u32) -> String {
    let mut letters = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    format!("{}{}", String::from_utf8_lossy(&letters), row)
}

/// One named sheet of an open workbook.
///
/// Row insertion and removal go through the workbook so that formulas on
/// other sheets (the overview) are adjusted as well.
pub struct SheetHandle<'a> {
    book: &'a mut Spreadsheet,
    name: String,
}

impl<'a> SheetHandle<'a> {
    pub(crate) fn new(book: &'a mut Spreadsheet, name: &str) -> Self {
        Self {
            book,
            name: name.to_string(),
        }
    }

    fn with_cell_mut(&mut self, addr: &str, f: impl FnOnce(&mut umya_spreadsheet::Cell)) {
        match self.book.get_sheet_by_name_mut(&self.name) {
            Some(sheet) => f(sheet.get_cell_mut(addr)),
            None => error!(sheet = %self.name, cell = addr, "sheet vanished while writing"),
        }
    }
}

impl SheetGrid for SheetHandle<'_> {
    fn value(&self, addr: &str) -> String {
        self.book
            .get_sheet_by_name(&self.name)
            .map(|s| s.get_value(addr))
            .unwrap_or_default()
    }

    fn formula(&self, addr: &str) -> String {
        self.book
            .get_sheet_by_name(&self.name)
            .and_then(|s| s.get_cell(addr))
            .map(|c| c.get_formula().to_string())
            .unwrap_or_default()
    }

    fn set_number(&mut self, addr: &str, value: f64) {
        self.with_cell_mut(addr, |c| {
            c.set_value_number(value);
        });
    }

    fn set_text(&mut self, addr: &str, value: &str) {
        self.with_cell_mut(addr, |c| {
            c.set_value_string(value);
        });
    }

    fn set_formula(&mut self, addr: &str, formula: &str) {
        let formula = formula.trim_start_matches('=');
        self.with_cell_mut(addr, |c| {
            c.set_formula(formula);
        });
    }

    fn clear(&mut self, addr: &str) {
        self.with_cell_mut(addr, |c| {
            c.set_value_string("");
        });
    }

    fn duplicate_row(&mut self, row: u32) {
        let Some(sheet) = self.book.get_sheet_by_name(&self.name) else {
            error!(sheet = %self.name, row, "cannot duplicate row: sheet not found");
            return;
        };

        let last_col = sheet.get_highest_column();
        let cells: Vec<(u32, umya_spreadsheet::Cell)> = (1..=last_col)
            .filter_map(|col| sheet.get_cell((col, row)).cloned().map(|c| (col, c)))
            .collect();

        self.book.insert_new_row(&self.name, &(row + 1), &1);

        let Some(sheet) = self.book.get_sheet_by_name_mut(&self.name) else {
            return;
        };
        for (col, src) in cells {
            let dst = sheet.get_cell_mut((col, row + 1));
            dst.set_style(src.get_style().clone());
            // the cached result comes along so the copy does not read as empty
            dst.set_value(src.get_value());
            if src.is_formula() {
                dst.set_formula(shift_rows(src.get_formula(), 1));
            }
        }
        debug!(sheet = %self.name, row, "duplicated row");
    }

    fn remove_row(&mut self, row: u32) {
        self.book.remove_row(&self.name, &row, &1);
        debug!(sheet = %self.name, row, "removed row");
    }
}
