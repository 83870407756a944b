use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::sheet::Loaded;
use chrono::{Datelike, NaiveDate};
use tracing::debug;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove entry `pair` (1-based) of `date`, or every entry of the day.
    ///
    /// A day left without entries keeps a placeholder, so the next save
    /// clears its row instead of leaving the old times on the sheet.
    /// Returns how many entries were removed.
    pub fn apply(loaded: &mut Loaded, date: NaiveDate, pair: Option<usize>) -> AppResult<usize> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let month = loaded
            .year
            .month_mut(date.month())
            .ok_or_else(|| AppError::InvalidMonth(date.month().to_string()))?;
        let sheet_name = month.sheet_name().to_string();

        let day = month
            .day_mut(date.day())
            .ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        if day.iter().all(Entry::is_placeholder) {
            return Err(AppError::NoEntriesForDate(date_str));
        }

        let removed = match pair {
            Some(p) => {
                let idx = p
                    .checked_sub(1)
                    .filter(|i| *i < day.len())
                    .ok_or(AppError::InvalidPair(p))?;
                day.remove(idx);
                1
            }
            None => {
                let n = day.len();
                day.clear();
                n
            }
        };

        if day.is_empty() {
            day.push(Entry::placeholder(&sheet_name, date));
        }
        month.reindex();

        debug!(date = %date_str, removed, "entries deleted");
        Ok(removed)
    }
}
