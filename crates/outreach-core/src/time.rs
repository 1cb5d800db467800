use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("date cannot be empty")]
    Empty,
    #[error("invalid date format: expected YYYY-MM-DD")]
    InvalidDateFormat,
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Calendar date of `ts` in `tz`, using the offset in force at that instant
/// rather than today's.
pub fn local_date<Tz: TimeZone>(ts: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    ts.with_timezone(tz).date_naive()
}

pub fn parse_date(input: &str) -> Result<NaiveDate, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| TimeParseError::InvalidDateFormat)
}

pub fn format_local_date<Tz: TimeZone>(ts: DateTime<Utc>, tz: &Tz) -> String {
    local_date(ts, tz).format("%Y-%m-%d").to_string()
}

pub fn format_local_datetime<Tz: TimeZone>(ts: DateTime<Utc>, tz: &Tz) -> String {
    ts.with_timezone(tz)
        .naive_local()
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
