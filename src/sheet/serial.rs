//! Spreadsheet serial date codec.
//!
//! Workbooks store a date as the number of days since day zero and a time of
//! day as the fractional part of a day. Hours and minutes are recovered
//! separately and rounded at minute granularity, otherwise float drift turns
//! 08:30 into 08:29.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use thiserror::Error;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("not a serial date: {0:?}")]
    Serial(String),

    #[error("not a day fraction: {0:?}")]
    Fraction(String),
}

/// Day zero of spreadsheet serials (1899-12-30, which keeps the day count
/// compatible with the 1900 leap-year bug).
pub fn excel_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default()
}

/// Midnight of `date`.
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Decode the day part of a serial. A fractional serial is floored.
pub fn serial_to_date(serial: &str) -> Result<NaiveDate, CodecError> {
    let s = serial.trim();
    let days = match s.parse::<i64>() {
        Ok(d) => d,
        Err(_) => s
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.floor() as i64)
            .ok_or_else(|| CodecError::Serial(serial.to_string()))?,
    };

    TimeDelta::try_days(days)
        .and_then(|d| excel_epoch().checked_add_signed(d))
        .ok_or_else(|| CodecError::Serial(serial.to_string()))
}

/// Like [`serial_to_date`], but anything unreadable decodes to day zero.
pub fn serial_to_date_or_epoch(serial: &str) -> NaiveDate {
    serial_to_date(serial).unwrap_or_else(|_| excel_epoch())
}

pub fn date_to_serial(date: NaiveDate) -> String {
    (date - excel_epoch()).num_days().to_string()
}

pub fn date_to_serial_number(date: NaiveDate) -> f64 {
    (date - excel_epoch()).num_days() as f64
}

fn parse_fraction(fraction: &str) -> Result<Option<f64>, CodecError> {
    let s = fraction.trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(Some)
        .ok_or_else(|| CodecError::Fraction(fraction.to_string()))
}

/// `base` plus the clock time stored as a day fraction. Empty → `base`.
pub fn fraction_to_clock_time(
    base: NaiveDateTime,
    fraction: &str,
) -> Result<NaiveDateTime, CodecError> {
    let Some(f) = parse_fraction(fraction)? else {
        return Ok(base);
    };

    let hours = (f * 24.0).floor();
    // two decimals first, then whole minutes
    let minutes = (((f - hours / 24.0) * MINUTES_PER_DAY) * 100.0).round() / 100.0;

    hours_and_minutes(hours, minutes.trunc())
        .and_then(|d| base.checked_add_signed(d))
        .ok_or_else(|| CodecError::Fraction(fraction.to_string()))
}

/// Duration stored as a day fraction. Empty → zero.
pub fn fraction_to_duration(fraction: &str) -> Result<TimeDelta, CodecError> {
    let Some(f) = parse_fraction(fraction)? else {
        return Ok(TimeDelta::zero());
    };

    let total_hours = f * 24.0;
    let hours = total_hours.floor();
    let minutes = ((total_hours - hours) * 60.0).round();

    hours_and_minutes(hours, minutes).ok_or_else(|| CodecError::Fraction(fraction.to_string()))
}

/// `None` when either part is outside the range of a `TimeDelta`.
fn hours_and_minutes(hours: f64, minutes: f64) -> Option<TimeDelta> {
    let h = TimeDelta::try_hours(hours as i64)?;
    let m = TimeDelta::try_minutes(minutes as i64)?;
    h.checked_add(&m)
}

/// Day fraction of `at` relative to midnight of `date`.
pub fn clock_time_to_fraction(date: NaiveDate, at: NaiveDateTime) -> f64 {
    (at - midnight(date)).num_minutes() as f64 / MINUTES_PER_DAY
}

pub fn duration_to_fraction(d: TimeDelta) -> f64 {
    d.num_minutes() as f64 / MINUTES_PER_DAY
}
