use crate::config::Config;
use crate::errors::AppResult;
use crate::sheet::{Loaded, load_year, write_entries};
use tracing::debug;

/// Outcome of a write/reload round trip.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub entries: usize,
    pub rows_inserted: usize,
    pub rows_removed: usize,
    pub drift: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.drift.is_empty()
    }
}

pub struct CheckLogic;

impl CheckLogic {
    /// Write the loaded year onto a copy of its workbook, load the copy
    /// again and list every day whose entries differ. No file is written.
    pub fn run(loaded: &Loaded, cfg: &Config) -> AppResult<CheckReport> {
        let layout = cfg.layout();
        let mut copy = loaded.workbook.clone();

        let written = write_entries(&mut copy, &loaded.year.months, &layout);
        let reloaded = load_year(&copy, &layout)?;

        let mut report = CheckReport {
            entries: written.entries_written,
            rows_inserted: written.rows_inserted,
            rows_removed: written.rows_removed,
            drift: Vec::new(),
        };

        for (before, after) in loaded.year.months.iter().zip(&reloaded.year.months) {
            for day in 1..=31u32 {
                let a = before.day(day);
                let b = after.day(day);
                let same = a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_content(y));
                if !same {
                    debug!(sheet = before.sheet_name(), day, before = a.len(), after = b.len(), "drift");
                    report.drift.push(format!(
                        "sheet {} day {day}: {} entr(y/ies) before, {} after",
                        before.sheet_name(),
                        a.len(),
                        b.len()
                    ));
                }
            }
        }

        Ok(report)
    }
}
