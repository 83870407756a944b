//! Month and year loading.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryKind, Month, ProjectDirectory, Year};
use crate::sheet::projects::load_projects;
use crate::sheet::row::{FieldWarning, parse_row};
use crate::sheet::workbook::Workbook;
use crate::sheet::{SheetLayout, month_sheet_names};
use crate::utils::path::expand_tilde;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct MonthLoad {
    pub month: Month,
    pub warnings: Vec<FieldWarning>,
    /// Rows after the header that could not be parsed at all.
    pub skipped_rows: usize,
}

#[derive(Debug, Clone)]
pub struct YearLoad {
    pub year: Year,
    pub warnings: Vec<FieldWarning>,
    pub skipped_rows: usize,
}

/// Everything the editing commands need from one workbook.
///
/// The open workbook travels with the model so a save writes back onto the
/// same sheets the entries were read from.
#[derive(Clone)]
pub struct Loaded {
    pub workbook: Workbook,
    pub year: Year,
    pub projects: ProjectDirectory,
    pub warnings: Vec<FieldWarning>,
}

/// Parse the rows of one month sheet into day buckets.
///
/// Header rows are skipped, unparsable rows are logged and counted,
/// placeholders and zero-length entries never make it into a bucket.
pub fn load_month(rows: &[Vec<String>], sheet_name: &str, layout: &SheetLayout) -> MonthLoad {
    let mut month = Month::new(sheet_name);
    let mut warnings = Vec::new();
    let mut skipped_rows = 0;

    for (i, row) in rows.iter().enumerate().skip(layout.start_row as usize) {
        let parsed = match parse_row(row, sheet_name, i, layout.col_date as usize) {
            Ok(p) => p,
            Err(e) => {
                debug!(sheet = sheet_name, row = i + 1, error = %e, "skipping row");
                skipped_rows += 1;
                continue;
            }
        };

        warnings.extend(parsed.warnings);

        match &parsed.entry.kind {
            EntryKind::Placeholder => continue,
            EntryKind::Workday(w) if w.is_zero_length() => {
                let message = "start equals end, entry ignored".to_string();
                warn!(sheet = sheet_name, row = i + 1, "{message}");
                warnings.push(FieldWarning {
                    sheet: sheet_name.to_string(),
                    row_index: i,
                    field: "end",
                    value: parsed.entry.date.to_string(),
                    message,
                });
                continue;
            }
            EntryKind::Workday(_) => month.push(parsed.entry),
        }
    }

    debug!(sheet = sheet_name, entries = month.len(), skipped_rows, "loaded month");

    MonthLoad {
        month,
        warnings,
        skipped_rows,
    }
}

/// Load the twelve month sheets.
///
/// The first twelve sheet names in lexical order must be "01".."12";
/// any other naming would silently map the wrong month, so it is an error.
pub fn load_year(workbook: &Workbook, layout: &SheetLayout) -> AppResult<YearLoad> {
    let mut names = workbook.sheet_names();
    names.sort();

    let expected = month_sheet_names();
    if names.len() < expected.len() || names[..expected.len()] != expected[..] {
        return Err(AppError::MonthSheets(names.join(", ")));
    }

    let mut months = Vec::with_capacity(expected.len());
    let mut warnings = Vec::new();
    let mut skipped_rows = 0;

    for name in &expected {
        let rows = workbook.rows(name)?;
        let load = load_month(&rows, name, layout);
        warnings.extend(load.warnings);
        skipped_rows += load.skipped_rows;
        months.push(load.month);
    }

    Ok(YearLoad {
        year: Year { months },
        warnings,
        skipped_rows,
    })
}

/// Load months and the project directory from an open workbook.
pub fn load_workbook(workbook: Workbook, cfg: &Config) -> AppResult<Loaded> {
    let year_load = load_year(&workbook, &cfg.layout())?;

    let projects = if workbook.has_sheet(&cfg.projects_sheet) {
        let rows = workbook.rows(&cfg.projects_sheet)?;
        load_projects(&rows, cfg.projects_header_rows)
    } else {
        warn!(sheet = %cfg.projects_sheet, "project sheet not found");
        ProjectDirectory::default()
    };

    info!(
        entries = year_load.year.entries().count(),
        projects = projects.len(),
        warnings = year_load.warnings.len(),
        "workbook loaded"
    );

    Ok(Loaded {
        workbook,
        year: year_load.year,
        projects,
        warnings: year_load.warnings,
    })
}

/// Open and load the configured workbook on a worker thread.
///
/// The receiver yields exactly one message: the finished load or its error.
pub fn spawn_load(cfg: Config) -> Receiver<AppResult<Loaded>> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let result = Workbook::open(&expand_tilde(&cfg.workbook))
            .and_then(|wb| load_workbook(wb, &cfg));
        // receiver gone means the caller stopped waiting
        let _ = tx.send(result);
    });

    rx
}
