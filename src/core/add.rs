use crate::errors::{AppError, AppResult};
use crate::models::{Entry, Month, ProjectDirectory, WorkTimes};
use crate::sheet::Loaded;
use crate::ui::messages::warning;
use crate::utils::date::is_weekend;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// What the user asked `add` to change. `None` fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    pub date: Option<NaiveDate>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub pause: Option<TimeDelta>,
    pub project: Option<String>,
    pub description: Option<String>,
    /// 1-based entry of the day to edit instead of adding a new one.
    pub edit_pair: Option<usize>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Apply `req` to the loaded year and return the resulting entry.
    pub fn apply(loaded: &mut Loaded, req: &AddRequest) -> AppResult<Entry> {
        let date = req
            .date
            .ok_or_else(|| AppError::InvalidDate("missing date".into()))?;

        let month = loaded
            .year
            .month_mut(date.month())
            .ok_or_else(|| AppError::InvalidMonth(date.month().to_string()))?;

        match req.edit_pair {
            Some(pair) => Self::edit(month, &loaded.projects, date, pair, req),
            None => Self::add(month, &loaded.projects, date, req),
        }
    }

    fn add(
        month: &mut Month,
        projects: &ProjectDirectory,
        date: NaiveDate,
        req: &AddRequest,
    ) -> AppResult<Entry> {
        // weekend rows always read back as placeholders
        if is_weekend(date) {
            return Err(AppError::InvalidDate(format!(
                "{date} is a weekend day; weekend rows cannot hold entries"
            )));
        }

        let sheet_name = month.sheet_name().to_string();
        let day = month
            .day_mut(date.day())
            .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        // start defaults to where the previous entry of the day ended
        let start = match req.start {
            Some(t) => date.and_time(t),
            None => day
                .iter()
                .filter_map(Entry::work)
                .map(|w| w.end)
                .max()
                .ok_or_else(|| AppError::InvalidTime("missing --in (no previous entry on this day)".into()))?,
        };
        let end = req
            .end
            .map(|t| date.and_time(t))
            .ok_or_else(|| AppError::InvalidTime("missing --out".into()))?;

        let mut work = WorkTimes::at(date);
        work.start = start;
        work.end = end;
        work.pause = req.pause.unwrap_or_else(TimeDelta::zero);
        if let Some(desc) = &req.description {
            work.description = desc.trim().to_string();
        }
        if let Some(code) = &req.project {
            assign_project(&mut work, projects, code);
        }
        validate(&work)?;

        let entry = Entry::workday(&sheet_name, date, work);

        // a cleared day is replaced by its first real entry
        day.retain(|e| !e.is_placeholder());

        // keep the day ordered by start time
        let pos = day
            .iter()
            .position(|e| e.work().is_some_and(|w| w.start > start))
            .unwrap_or(day.len());
        day.insert(pos, entry);
        month.reindex();

        month
            .day(date.day())
            .get(pos)
            .cloned()
            .ok_or_else(|| AppError::Other("entry vanished after insert".into()))
    }

    fn edit(
        month: &mut Month,
        projects: &ProjectDirectory,
        date: NaiveDate,
        pair: usize,
        req: &AddRequest,
    ) -> AppResult<Entry> {
        let day = month
            .day_mut(date.day())
            .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        if day.iter().all(Entry::is_placeholder) {
            return Err(AppError::NoEntriesForDate(date.to_string()));
        }

        let entry = pair
            .checked_sub(1)
            .and_then(|i| day.get_mut(i))
            .ok_or(AppError::InvalidPair(pair))?;
        let mut work = entry.work().cloned().ok_or(AppError::InvalidPair(pair))?;

        if let Some(t) = req.start {
            work.start = date.and_time(t);
        }
        if let Some(t) = req.end {
            work.end = date.and_time(t);
        }
        if let Some(p) = req.pause {
            work.pause = p;
        }
        if let Some(desc) = &req.description {
            work.description = desc.trim().to_string();
        }
        if let Some(code) = &req.project {
            assign_project(&mut work, projects, code);
        }
        validate(&work)?;

        if let Some(w) = entry.work_mut() {
            *w = work;
        }
        Ok(entry.clone())
    }
}

/// Copy name and customer of `code` from the directory. Unknown codes are
/// kept as typed.
fn assign_project(work: &mut WorkTimes, projects: &ProjectDirectory, code: &str) {
    work.project_code = code.trim().to_string();
    match projects.lookup_code(code) {
        Some(p) => {
            work.project_name = p.name.clone();
            work.customer = p.customer.clone();
        }
        None => {
            warning(format!("Unknown project code '{}'", code.trim()));
            work.project_name.clear();
            work.customer.clear();
        }
    }
}

fn validate(work: &WorkTimes) -> AppResult<()> {
    if work.end <= work.start {
        return Err(AppError::EmptyInterval {
            start: clock(work.start),
            end: clock(work.end),
        });
    }
    if work.pause < TimeDelta::zero() || work.pause >= work.end - work.start {
        return Err(AppError::InvalidDuration(format!(
            "pause of {} minutes does not fit between {} and {}",
            work.pause.num_minutes(),
            clock(work.start),
            clock(work.end)
        )));
    }
    Ok(())
}

fn clock(t: NaiveDateTime) -> String {
    t.format("%H:%M").to_string()
}
