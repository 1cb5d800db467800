use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDate};
use outreach_core::time::{format_local_date, local_date, now_utc, parse_date};
use outreach_core::{OutreachId, OutreachRecord, OutreachStatus, OutreachType, Platform};
use std::str::FromStr;

pub struct Clock {
    pub tz: Local,
    pub today: NaiveDate,
}

pub fn clock() -> Clock {
    Clock {
        tz: Local,
        today: local_date(now_utc(), &Local),
    }
}

pub fn parse_outreach_id(raw: &str) -> Result<OutreachId> {
    Ok(OutreachId::new(raw)?)
}

pub fn parse_label<T>(raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(raw.parse::<T>()?)
}

pub fn parse_platform(raw: &str) -> Result<Platform> {
    parse_choice(raw, "platform", Platform::ALL, Platform::slug)
}

pub fn parse_outreach_type(raw: &str) -> Result<OutreachType> {
    parse_choice(raw, "outreach type", OutreachType::ALL, OutreachType::slug)
}

pub fn parse_status(raw: &str) -> Result<OutreachStatus> {
    parse_choice(raw, "status", OutreachStatus::ALL, OutreachStatus::slug)
}

fn parse_choice<T>(raw: &str, what: &str, all: &[T], slug: fn(T) -> String) -> Result<T>
where
    T: FromStr + Copy,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>().with_context(|| {
        let choices: Vec<String> = all.iter().map(|value| slug(*value)).collect();
        format!(
            "invalid {what} {:?}: expected one of {}",
            raw.trim(),
            choices.join(", ")
        )
    })
}

pub fn parse_optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw {
        Some(value) => Ok(Some(parse_date(value)?)),
        None => Ok(None),
    }
}

pub fn format_record_line(record: &OutreachRecord, tz: &Local) -> String {
    let mut line = format!(
        "{}  {}  {}  [{} / {}]  {}",
        record.id,
        format_local_date(record.created_at, tz),
        record.client_name,
        record.platform,
        record.outreach_type,
        record.status
    );
    if let Some(date) = record.follow_up_date {
        line.push_str(&format!("  follow-up {}", date.format("%Y-%m-%d")));
    }
    line
}
