#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Datelike, NaiveDate};
use rtimesheet::config::Config;
use rtimesheet::sheet::serial::date_to_serial_number;
use rtimesheet::sheet::{Loaded, SheetLayout, Workbook, load_workbook, month_sheet_names};
use rtimesheet::utils::date::{all_days_of_month, weekday_label};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use umya_spreadsheet::{Spreadsheet, Worksheet};

pub const YEAR: i32 = 2025;

/// Binary under test with `HOME` pointed at `home`, so no user
/// configuration leaks into the run.
pub fn rts(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rtimesheet");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Fresh, empty home directory inside the system temp dir
pub fn temp_home(name: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("{name}_rtimesheet_home"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_rtimesheet_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(YEAR, month, day).expect("valid fixture date")
}

/// Times of one fixture entry, in minutes after midnight.
#[derive(Debug, Clone)]
pub struct Times {
    pub start: u32,
    pub end: u32,
    pub pause: u32,
    pub project: &'static str,
    pub description: &'static str,
}

pub fn times(start: (u32, u32), end: (u32, u32), pause: u32) -> Times {
    Times {
        start: start.0 * 60 + start.1,
        end: end.0 * 60 + end.1,
        pause,
        project: "",
        description: "",
    }
}

fn fraction(minutes: u32) -> f64 {
    minutes as f64 / 1440.0
}

/// Vacation and sickness cells of the fixture day rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Helpers {
    /// K and L hold 0, as in a generated template.
    Zeroed,
    /// K and L are never written, so the hours formula is the last cell.
    Blank,
}

/// Date, weekday label, hours formula and (optionally) the two zero
/// columns of a day row.
pub fn write_day_row(ws: &mut Worksheet, row: u32, date: NaiveDate, helpers: Helpers) {
    ws.get_cell_mut((1, row)).set_value_number(date_to_serial_number(date));
    ws.get_cell_mut((2, row)).set_value_string(weekday_label(date));
    ws.get_cell_mut((10, row))
        .set_formula(format!("IF(D{row}>C{row},D{row}-C{row}-E{row},0)"));
    if helpers == Helpers::Zeroed {
        ws.get_cell_mut((11, row)).set_value_number(0);
        ws.get_cell_mut((12, row)).set_value_number(0);
    }
}

pub fn write_times(ws: &mut Worksheet, row: u32, t: &Times) {
    ws.get_cell_mut((3, row)).set_value_number(fraction(t.start));
    ws.get_cell_mut((4, row)).set_value_number(fraction(t.end));
    if t.pause > 0 {
        ws.get_cell_mut((5, row)).set_value_number(fraction(t.pause));
    }
    if !t.project.is_empty() {
        ws.get_cell_mut((6, row)).set_value_string(t.project);
    }
    if !t.description.is_empty() {
        ws.get_cell_mut((9, row)).set_value_string(t.description);
    }
}

/// Fill one month sheet: a row per entry, one blank row for days without.
pub fn fill_month(ws: &mut Worksheet, month: u32, entries: &[(NaiveDate, Times)], helpers: Helpers) {
    let layout = SheetLayout::default();
    ws.get_cell_mut("A1").set_value_string(format!("Arbeitszeitnachweis {month:02}/{YEAR}"));

    let mut row = layout.first_data_row();
    for date in all_days_of_month(YEAR, month) {
        let of_day: Vec<&Times> = entries
            .iter()
            .filter(|(d, _)| *d == date)
            .map(|(_, t)| t)
            .collect();

        if of_day.is_empty() {
            write_day_row(ws, row, date, helpers);
            row += 1;
            continue;
        }
        for t in of_day {
            write_day_row(ws, row, date, helpers);
            write_times(ws, row, t);
            row += 1;
        }
    }
}

/// Twelve month sheets, project sheet and overview, with `entries` placed.
pub fn fixture_book(entries: &[(NaiveDate, Times)], projects: &[(&str, &str, &str)]) -> Spreadsheet {
    build_book(entries, projects, Helpers::Zeroed)
}

/// Same layout, but the day rows end with the hours formula.
pub fn bare_fixture_book(entries: &[(NaiveDate, Times)]) -> Spreadsheet {
    build_book(entries, &[], Helpers::Blank)
}

fn build_book(
    entries: &[(NaiveDate, Times)],
    projects: &[(&str, &str, &str)],
    helpers: Helpers,
) -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();

    for (i, name) in month_sheet_names().iter().enumerate() {
        let month = i as u32 + 1;
        let ws = book.new_sheet(name).expect("new month sheet");
        let of_month: Vec<(NaiveDate, Times)> = entries
            .iter()
            .filter(|(d, _)| d.month() == month)
            .cloned()
            .collect();
        fill_month(ws, month, &of_month, helpers);
    }

    let ws = book.new_sheet("Projektnummern").expect("new project sheet");
    ws.get_cell_mut("A1").set_value_string("Projektnummern");
    ws.get_cell_mut("A4").set_value_string("Projekt-Nr.");
    ws.get_cell_mut("B4").set_value_string("Projekt");
    ws.get_cell_mut("C4").set_value_string("Kunde");
    for (i, (code, name, customer)) in projects.iter().enumerate() {
        let row = 5 + i as u32;
        ws.get_cell_mut((1, row)).set_value_string(*code);
        ws.get_cell_mut((2, row)).set_value_string(*name);
        ws.get_cell_mut((3, row)).set_value_string(*customer);
    }

    let ws = book.new_sheet("Gesamt").expect("new overview sheet");
    for (i, name) in month_sheet_names().iter().enumerate() {
        let row = 4 + i as u32;
        ws.get_cell_mut((6, row)).set_formula(format!("SUM('{name}'!J7:J100)"));
    }

    book
}

pub fn fixture_loaded(entries: &[(NaiveDate, Times)], projects: &[(&str, &str, &str)]) -> Loaded {
    let wb = Workbook::from_spreadsheet(fixture_book(entries, projects));
    load_workbook(wb, &Config::default()).expect("fixture loads")
}

pub fn bare_fixture_loaded(entries: &[(NaiveDate, Times)]) -> Loaded {
    let wb = Workbook::from_spreadsheet(bare_fixture_book(entries));
    load_workbook(wb, &Config::default()).expect("bare fixture loads")
}

/// 1-based rows of `sheet` whose date column holds `date`.
pub fn rows_of(wb: &Workbook, sheet: &str, date: NaiveDate) -> Vec<u32> {
    let serial = rtimesheet::sheet::serial::date_to_serial(date);
    wb.rows(sheet)
        .expect("sheet rows")
        .iter()
        .enumerate()
        .filter(|(_, r)| r.first().is_some_and(|c| c.trim() == serial))
        .map(|(i, _)| i as u32 + 1)
        .collect()
}

/// Write a config file that points at `workbook` and return its path.
pub fn write_config(home: &Path, workbook: &str) -> String {
    let path = home.join("rtimesheet.conf");
    let cfg = Config {
        workbook: workbook.to_string(),
        ..Config::default()
    };
    fs::write(&path, serde_yaml::to_string(&cfg).expect("serialize config")).expect("write config");
    path.to_string_lossy().to_string()
}
