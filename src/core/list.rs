use crate::models::{Entry, Year};
use crate::utils::colors::{colorize_date, colorize_optional, colorize_total};
use crate::utils::date::is_weekend;
use crate::utils::table::Table;
use crate::utils::time::format_duration;
use chrono::{Datelike, NaiveDate, TimeDelta};

const DESCRIPTION_WIDTH: usize = 40;

/// Which entries `list` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Month(u32),
    Day(NaiveDate),
}

impl ListFilter {
    fn matches(&self, entry: &Entry) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Month(m) => entry.date.month() == *m,
            ListFilter::Day(d) => entry.date == *d,
        }
    }
}

pub struct ListLogic;

impl ListLogic {
    /// Workdays matching `filter`, in sheet order, with their 1-based
    /// position inside the day.
    pub fn select(year: &Year, filter: ListFilter) -> Vec<(usize, &Entry)> {
        year.entries()
            .filter(|e| !e.is_placeholder() && filter.matches(e))
            .map(|e| (e.row_index + 1, e))
            .collect()
    }

    pub fn table(rows: &[(usize, &Entry)]) -> Table {
        let mut table = Table::new(&[
            "Date", "Day", "#", "Start", "End", "Pause", "Net", "Project", "Description",
        ]);

        let mut total = TimeDelta::zero();
        for (pair, entry) in rows {
            let Some(work) = entry.work() else { continue };
            total += work.net();

            table.add_row(vec![
                colorize_date(&entry.date_str(), is_weekend(entry.date)),
                entry.day_label.clone(),
                pair.to_string(),
                work.start.format("%H:%M").to_string(),
                work.end.format("%H:%M").to_string(),
                colorize_optional(&format_duration(work.pause)),
                format_duration(work.net()),
                project_label(&work.project_code, &work.project_name),
                shorten(&work.description),
            ]);
        }

        table.add_row(vec![
            colorize_total("Total"),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            colorize_total(&format_duration(total)),
            String::new(),
            String::new(),
        ]);

        table
    }
}

fn project_label(code: &str, name: &str) -> String {
    match (code.is_empty(), name.is_empty()) {
        (true, _) => String::new(),
        (false, true) => code.to_string(),
        (false, false) => format!("{code} {name}"),
    }
}

/// First wrapped line of a description, marked when more follows.
fn shorten(text: &str) -> String {
    let lines = textwrap::wrap(text, DESCRIPTION_WIDTH);
    match lines.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [first, ..] => format!("{first}…"),
    }
}
