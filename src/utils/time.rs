//! Time utilities: parsing HH:MM and pause durations, formatting durations.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, TimeDelta};
use regex::Regex;
use std::sync::LazyLock;

static PAUSE_UNITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)h)?\s*(?:(\d+)m(?:in)?)?$").expect("valid pause pattern")
});

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Parse a pause: "30" (minutes), "30m", "1h", "1h30m", "1:30".
pub fn parse_duration(s: &str) -> AppResult<TimeDelta> {
    let s = s.trim();

    if let Ok(mins) = s.parse::<i64>() {
        return Ok(TimeDelta::minutes(mins));
    }

    if let Some((h, m)) = s.split_once(':') {
        let h = h.parse::<i64>().ok();
        let m = m.parse::<i64>().ok().filter(|m| (0..60).contains(m));
        if let (Some(h), Some(m)) = (h, m) {
            return Ok(TimeDelta::hours(h) + TimeDelta::minutes(m));
        }
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    let caps = PAUSE_UNITS
        .captures(s)
        .filter(|c| c.get(1).is_some() || c.get(2).is_some())
        .ok_or_else(|| AppError::InvalidDuration(s.to_string()))?;

    let hours = caps
        .get(1)
        .and_then(|h| h.as_str().parse::<i64>().ok())
        .unwrap_or(0);
    let minutes = caps
        .get(2)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(0);

    Ok(TimeDelta::hours(hours) + TimeDelta::minutes(minutes))
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// "HH:MM", or an empty string for a zero duration.
pub fn format_duration(d: TimeDelta) -> String {
    if d.is_zero() {
        String::new()
    } else {
        format_minutes(d.num_minutes())
    }
}
