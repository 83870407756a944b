//! Loading and saving the configured workbook.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::sheet::{Loaded, WriteReport, fix_overview_formulas, spawn_load, write_entries};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::io::{self, Write};
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tracing::info;

const PROGRESS_TICK: Duration = Duration::from_millis(250);

/// Load the workbook on a worker thread, printing a dot per tick meanwhile.
pub fn load_with_progress(cfg: &Config) -> AppResult<Loaded> {
    let rx = spawn_load(cfg.clone());

    eprint!("📂 Loading {} ", cfg.workbook);
    let loaded = loop {
        match rx.recv_timeout(PROGRESS_TICK) {
            Ok(result) => break result,
            Err(RecvTimeoutError::Timeout) => {
                eprint!(".");
                io::stderr().flush().ok();
            }
            Err(RecvTimeoutError::Disconnected) => {
                eprintln!();
                return Err(AppError::Other("workbook loader stopped unexpectedly".into()));
            }
        }
    };
    eprintln!();

    let loaded = loaded?;
    if !loaded.warnings.is_empty() {
        warning(format!(
            "{} field(s) could not be read and were set to zero (see log for details)",
            loaded.warnings.len()
        ));
    }

    Ok(loaded)
}

/// Write the given months back, fix the overview sheet and save to the
/// configured output path.
pub fn save_months(loaded: &mut Loaded, cfg: &Config, months: &[u32]) -> AppResult<WriteReport> {
    let layout = cfg.layout();
    let selected = loaded
        .year
        .months
        .iter()
        .enumerate()
        .filter(|(i, _)| months.contains(&(*i as u32 + 1)))
        .map(|(_, m)| m);

    let report = write_entries(&mut loaded.workbook, selected, &layout);
    if !report.sheets_skipped.is_empty() {
        return Err(AppError::SheetNotFound(report.sheets_skipped.join(", ")));
    }

    let overview = cfg.overview();
    fix_overview_formulas(&mut loaded.workbook, &overview);
    loaded.workbook.set_active_sheet(&overview.sheet);

    let out = expand_tilde(cfg.output_path());
    loaded.workbook.save_as(&out)?;

    info!(
        file = %out.display(),
        entries = report.entries_written,
        inserted = report.rows_inserted,
        removed = report.rows_removed,
        "workbook saved"
    );

    Ok(report)
}
