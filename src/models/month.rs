use super::entry::Entry;
use chrono::Datelike;

pub const DAYS_PER_MONTH: usize = 31;

/// Entries of one month sheet, bucketed by day of month.
///
/// Bucket `i` only ever holds entries whose `date.day() - 1 == i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Month {
    sheet_name: String,
    days: Vec<Vec<Entry>>,
}

impl Month {
    pub fn new(sheet_name: &str) -> Self {
        Self {
            sheet_name: sheet_name.to_string(),
            days: vec![Vec::new(); DAYS_PER_MONTH],
        }
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Append to the bucket of `entry.date`, keeping discovery order.
    pub fn push(&mut self, mut entry: Entry) {
        let bucket = &mut self.days[entry.date.day0() as usize];
        entry.row_index = bucket.len();
        bucket.push(entry);
    }

    /// Entries of `day` (1-based). Out of range → empty.
    pub fn day(&self, day: u32) -> &[Entry] {
        day.checked_sub(1)
            .and_then(|i| self.days.get(i as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Mutable bucket of `day` (1-based). Callers only store entries dated on that day.
    pub fn day_mut(&mut self, day: u32) -> Option<&mut Vec<Entry>> {
        day.checked_sub(1).and_then(|i| self.days.get_mut(i as usize))
    }

    pub fn days(&self) -> &[Vec<Entry>] {
        &self.days
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.days.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// Renumber `row_index` after in-place edits.
    pub fn reindex(&mut self) {
        for day in &mut self.days {
            for (i, e) in day.iter_mut().enumerate() {
                e.row_index = i;
            }
        }
    }
}

/// Twelve months, ordered by sheet name.
#[derive(Debug, Clone, PartialEq)]
pub struct Year {
    pub months: Vec<Month>,
}

impl Year {
    /// Month by calendar number (1..=12).
    pub fn month(&self, month: u32) -> Option<&Month> {
        month.checked_sub(1).and_then(|i| self.months.get(i as usize))
    }

    pub fn month_mut(&mut self, month: u32) -> Option<&mut Month> {
        month
            .checked_sub(1)
            .and_then(|i| self.months.get_mut(i as usize))
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.months.iter().flat_map(Month::entries)
    }
}
