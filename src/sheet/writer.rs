//! Write-back of in-memory entries onto month sheets.
//!
//! A month sheet holds one row per entry, ordered by date. When the number
//! of entries of a day changes, rows are duplicated (keeping formulas and
//! styles) or removed so that every entry lands on its own row without
//! touching the rows of other days.
//!
//! Each day with entries runs through a small state machine:
//!
//! * `Scanning`: walk down from the current row past rows dated before the
//!   day. Stops on the day's row, on an empty date cell or on a later date.
//! * `Writing(i)`: write entry `i`, duplicating the row first when the next
//!   row does not already belong to the day.
//! * `Cleaning`: drop rows below the last entry that still carry the same
//!   date (left over from a previous save with more entries).
//!
//! Every step either moves down a finite sheet, writes one of a finite
//! number of entries or removes a row, so the machine always terminates.

use crate::models::{Entry, EntryKind, Month};
use crate::sheet::grid::{SheetGrid, cell_ref};
use crate::sheet::serial::{
    clock_time_to_fraction, date_to_serial_number, duration_to_fraction, serial_to_date_or_epoch,
};
use crate::sheet::workbook::Workbook;
use crate::sheet::SheetLayout;
use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Scanning,
    Writing(usize),
    Cleaning,
    Done,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub sheets_written: usize,
    pub sheets_skipped: Vec<String>,
    pub entries_written: usize,
    pub rows_inserted: usize,
    pub rows_removed: usize,
}

impl WriteReport {
    fn merge(&mut self, other: WriteReport) {
        self.sheets_written += other.sheets_written;
        self.sheets_skipped.extend(other.sheets_skipped);
        self.entries_written += other.entries_written;
        self.rows_inserted += other.rows_inserted;
        self.rows_removed += other.rows_removed;
    }
}

/// Aligns and writes the entries of a single day.
pub struct DayAlignment<'a, G: SheetGrid + ?Sized> {
    grid: &'a mut G,
    layout: &'a SheetLayout,
    entries: &'a [Entry],
    row: u32,
    phase: Phase,
    report: WriteReport,
}

impl<'a, G: SheetGrid + ?Sized> DayAlignment<'a, G> {
    /// `row` is where scanning starts. An empty day is `Done` right away.
    pub fn new(grid: &'a mut G, layout: &'a SheetLayout, entries: &'a [Entry], row: u32) -> Self {
        let phase = if entries.is_empty() {
            Phase::Done
        } else {
            Phase::Scanning
        };
        Self {
            grid,
            layout,
            entries,
            row,
            phase,
            report: WriteReport::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    fn written_date(&self, row: u32) -> Option<NaiveDate> {
        written_date(&*self.grid, self.layout, row)
    }

    /// Run one transition and return the new phase.
    pub fn step(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Scanning => self.scan(),
            Phase::Writing(i) => self.write(i),
            Phase::Cleaning => self.clean(),
            Phase::Done => Phase::Done,
        };
        self.phase
    }

    /// Step until `Done`; returns the row of the day's last entry.
    pub fn run(mut self) -> (u32, WriteReport) {
        while self.step() != Phase::Done {}
        (self.row, self.report)
    }

    fn scan(&mut self) -> Phase {
        let target = self.entries[0].date;
        match self.written_date(self.row) {
            None => Phase::Writing(0),
            Some(d) if d < target => {
                self.row += 1;
                Phase::Scanning
            }
            Some(d) if d == target => Phase::Writing(0),
            Some(d) => {
                // a later day sits where this day belongs: open a row above it
                warn!(row = self.row, written = %d, target = %target, "sheet rows out of order, inserting row");
                self.grid.duplicate_row(self.row);
                self.report.rows_inserted += 1;
                Phase::Writing(0)
            }
        }
    }

    fn write(&mut self, i: usize) -> Phase {
        let entries = self.entries;
        let entry = &entries[i];

        if i > 0 {
            if self.written_date(self.row + 1) != Some(entry.date) {
                self.grid.duplicate_row(self.row);
                self.report.rows_inserted += 1;
            }
            self.row += 1;
        }

        write_entry(self.grid, self.layout, self.row, entry);
        self.report.entries_written += 1;

        if i + 1 < entries.len() {
            Phase::Writing(i + 1)
        } else {
            Phase::Cleaning
        }
    }

    fn clean(&mut self) -> Phase {
        match (self.written_date(self.row), self.written_date(self.row + 1)) {
            (Some(here), Some(next)) if here == next => {
                self.grid.remove_row(self.row + 1);
                self.report.rows_removed += 1;
                Phase::Cleaning
            }
            _ => Phase::Done,
        }
    }
}

/// Date in the date column of `row`; `None` when the cell is empty.
/// Non-date text decodes to day zero, i.e. "before" any real date.
fn written_date<G: SheetGrid + ?Sized>(grid: &G, layout: &SheetLayout, row: u32) -> Option<NaiveDate> {
    let raw = grid.value(&cell_ref(layout.col_date, row));
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else {
        Some(serial_to_date_or_epoch(raw))
    }
}

/// Write one entry into `row`.
///
/// The date is always written. A placeholder clears the data columns;
/// a workday writes start, end, pause, project code and description.
/// Hours stay with the sheet's formulas; a day label is only written
/// where the cell holds text that differs from the entry's.
pub fn write_entry<G: SheetGrid + ?Sized>(grid: &mut G, layout: &SheetLayout, row: u32, entry: &Entry) {
    let at = |col: u32| cell_ref(col, row);

    grid.set_number(&at(layout.col_date), date_to_serial_number(entry.date));

    // a row opened for another day still carries that day's label
    let day = at(layout.col_day);
    if grid.formula(&day).is_empty() && grid.value(&day).trim() != entry.day_label {
        grid.set_text(&day, &entry.day_label);
    }

    let work = match &entry.kind {
        EntryKind::Placeholder => {
            for col in layout.data_columns() {
                grid.clear(&at(col));
            }
            debug!(row, date = %entry.date, "cleared placeholder row");
            return;
        }
        EntryKind::Workday(w) => w,
    };

    grid.set_number(&at(layout.col_start), clock_time_to_fraction(entry.date, work.start));
    grid.set_number(&at(layout.col_end), clock_time_to_fraction(entry.date, work.end));
    if work.pause.is_zero() {
        grid.clear(&at(layout.col_pause));
    } else {
        grid.set_number(&at(layout.col_pause), duration_to_fraction(work.pause));
    }
    grid.set_text(&at(layout.col_project), &work.project_code);
    grid.set_text(&at(layout.col_description), &work.description);

    debug!(row, date = %entry.date, "wrote entry");
}

/// Reconcile one month sheet with `month`.
pub fn write_month<G: SheetGrid + ?Sized>(grid: &mut G, month: &Month, layout: &SheetLayout) -> WriteReport {
    let mut report = WriteReport {
        sheets_written: 1,
        ..WriteReport::default()
    };
    let mut row = layout.first_data_row();
    let first_of_month = month.entries().next().and_then(|e| e.date.with_day(1));

    for (i, day) in month.days().iter().enumerate() {
        if day.is_empty() {
            // blank template row, already an empty day; a row holding a
            // later day means the template has no row for this one
            let slot = first_of_month.and_then(|d| d.checked_add_days(Days::new(i as u64)));
            match (written_date(&*grid, layout, row), slot) {
                (Some(written), Some(slot)) if written > slot => {
                    debug!(row, day = %slot, written = %written, "no row for empty day");
                }
                _ => row += 1,
            }
            continue;
        }

        let (last_row, day_report) = DayAlignment::new(&mut *grid, layout, day, row).run();
        row = last_row;
        report.merge(day_report);
    }

    report
}

/// Write every given month onto its sheet.
///
/// Never fails: a missing sheet is logged and reported, the other months
/// are still written.
pub fn write_entries<'m, I>(workbook: &mut Workbook, months: I, layout: &SheetLayout) -> WriteReport
where
    I: IntoIterator<Item = &'m Month>,
{
    let mut report = WriteReport::default();

    for month in months {
        let name = month.sheet_name();
        let mut sheet = match workbook.sheet(name) {
            Ok(s) => s,
            Err(e) => {
                error!(sheet = name, error = %e, "cannot write month");
                report.sheets_skipped.push(name.to_string());
                continue;
            }
        };

        info!(month = name, entries = month.len(), "writing entries for month");
        report.merge(write_month(&mut sheet, month, layout));
    }

    report
}
