use crate::sheet::serial::midnight;
use crate::utils::date::weekday_label;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// One row of a month sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub sheet_name: String, // ⇔ owning month sheet ("01".."12")
    pub row_index: usize,   // ⇔ position inside the day, recomputed on load
    pub date: NaiveDate,    // ⇔ column A (serial date)
    pub day_label: String,  // ⇔ column B ("Mo".."So")
    pub kind: EntryKind,
    pub raw_cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    /// A real working-time entry.
    Workday(WorkTimes),
    /// Weekend/blank template row, or a day whose entries were all deleted.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkTimes {
    pub start: NaiveDateTime, // ⇔ column C
    pub end: NaiveDateTime,   // ⇔ column D
    pub pause: TimeDelta,     // ⇔ column E
    pub project_code: String, // ⇔ column F
    pub project_name: String, // ⇔ column G
    pub customer: String,     // ⇔ column H
    pub description: String,  // ⇔ column I
    pub worked: TimeDelta,    // ⇔ column J (formula)
    pub vacation: TimeDelta,  // ⇔ column K
    pub sickness: TimeDelta,  // ⇔ column L
    pub note: String,         // ⇔ column M
}

impl WorkTimes {
    /// Zero-length times anchored at midnight of `date`.
    pub fn at(date: NaiveDate) -> Self {
        let base = midnight(date);
        Self {
            start: base,
            end: base,
            pause: TimeDelta::zero(),
            project_code: String::new(),
            project_name: String::new(),
            customer: String::new(),
            description: String::new(),
            worked: TimeDelta::zero(),
            vacation: TimeDelta::zero(),
            sickness: TimeDelta::zero(),
            note: String::new(),
        }
    }

    /// Presence time minus pause.
    pub fn net(&self) -> TimeDelta {
        self.end - self.start - self.pause
    }

    pub fn is_zero_length(&self) -> bool {
        self.start == self.end
    }
}

impl Entry {
    pub fn workday(sheet_name: &str, date: NaiveDate, times: WorkTimes) -> Self {
        Self {
            sheet_name: sheet_name.to_string(),
            row_index: 0,
            date,
            day_label: weekday_label(date).to_string(),
            kind: EntryKind::Workday(times),
            raw_cells: Vec::new(),
        }
    }

    pub fn placeholder(sheet_name: &str, date: NaiveDate) -> Self {
        Self {
            sheet_name: sheet_name.to_string(),
            row_index: 0,
            date,
            day_label: weekday_label(date).to_string(),
            kind: EntryKind::Placeholder,
            raw_cells: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, EntryKind::Placeholder)
    }

    pub fn work(&self) -> Option<&WorkTimes> {
        match &self.kind {
            EntryKind::Workday(w) => Some(w),
            EntryKind::Placeholder => None,
        }
    }

    pub fn work_mut(&mut self) -> Option<&mut WorkTimes> {
        match &mut self.kind {
            EntryKind::Workday(w) => Some(w),
            EntryKind::Placeholder => None,
        }
    }

    /// Equality on what the sheet stores, ignoring load position and raw cells.
    pub fn same_content(&self, other: &Entry) -> bool {
        self.sheet_name == other.sheet_name
            && self.date == other.date
            && self.day_label == other.day_label
            && self.kind == other.kind
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
