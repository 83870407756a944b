use chrono::{Datelike, NaiveDate, Weekday};

const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"];

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Two-letter (German) weekday code as written in column B.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_monday() as usize]
}

/// "Sa" / "So" mark weekend template rows.
pub fn is_weekend_label(label: &str) -> bool {
    matches!(label.trim(), "Sa" | "So")
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Accepts "3", "03" or "2025-03" and returns the month number.
pub fn parse_month(s: &str) -> Option<u32> {
    let s = s.trim();
    let m = match s.split_once('-') {
        Some((_, m)) => m,
        None => s,
    };
    m.parse::<u32>().ok().filter(|m| (1..=12).contains(m))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1);

    while let Some(day) = d.filter(|d| d.month() == month) {
        out.push(day);
        d = day.succ_opt();
    }

    out
}
