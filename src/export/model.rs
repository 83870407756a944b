// src/export/model.rs

use crate::models::{Entry, EntryKind};
use crate::utils::time::format_duration;
use serde::Serialize;

/// Flat view of a workday entry for CSV / JSON / XLSX.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub sheet: String,
    pub date: String,
    pub day: String,
    pub start: String,
    pub end: String,
    pub pause: String,
    pub net: String,
    pub project_code: String,
    pub project_name: String,
    pub customer: String,
    pub description: String,
    pub note: String,
}

/// How a column is written to XLSX.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ColumnKind {
    Text,
    Date,
    Clock,
    Duration,
}

impl EntryExport {
    /// Placeholders have nothing to export.
    pub fn from_entry(e: &Entry) -> Option<Self> {
        let EntryKind::Workday(w) = &e.kind else {
            return None;
        };

        Some(Self {
            sheet: e.sheet_name.clone(),
            date: e.date_str(),
            day: e.day_label.clone(),
            start: w.start.format("%H:%M").to_string(),
            end: w.end.format("%H:%M").to_string(),
            pause: format_duration(w.pause),
            net: format_duration(w.net()),
            project_code: w.project_code.clone(),
            project_name: w.project_name.clone(),
            customer: w.customer.clone(),
            description: w.description.clone(),
            note: w.note.clone(),
        })
    }
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "sheet",
        "date",
        "day",
        "start",
        "end",
        "pause",
        "net",
        "project_code",
        "project_name",
        "customer",
        "description",
        "note",
    ]
}

pub(crate) fn column_kinds() -> Vec<ColumnKind> {
    use ColumnKind::*;
    vec![
        Text, Date, Text, Clock, Clock, Duration, Duration, Text, Text, Text, Text, Text,
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.sheet.clone(),
        e.date.clone(),
        e.day.clone(),
        e.start.clone(),
        e.end.clone(),
        e.pause.clone(),
        e.net.clone(),
        e.project_code.clone(),
        e.project_name.clone(),
        e.customer.clone(),
        e.description.clone(),
        e.note.clone(),
    ]
}
