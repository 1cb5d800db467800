use crate::domain::OutreachRecord;
use crate::error::CoreError;
use crate::time::local_date;
use chrono::{Datelike, Duration, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl FromStr for WeekStart {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            _ => Err(CoreError::InvalidWeekStart(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub label: String,
    pub count: usize,
}

pub fn records_on<'a, Tz: TimeZone>(
    records: &'a [OutreachRecord],
    date: NaiveDate,
    tz: &Tz,
) -> Vec<&'a OutreachRecord> {
    records
        .iter()
        .filter(|record| local_date(record.created_at, tz) == date)
        .collect()
}

/// First and last day (inclusive) of the week containing `today`.
pub fn week_bounds(today: NaiveDate, week_start: WeekStart) -> (NaiveDate, NaiveDate) {
    let back = match week_start {
        WeekStart::Sunday => today.weekday().num_days_from_sunday(),
        WeekStart::Monday => today.weekday().num_days_from_monday(),
    };
    let start = today - Duration::days(i64::from(back));
    (start, start + Duration::days(6))
}

pub fn weekly_activity<Tz: TimeZone>(
    records: &[OutreachRecord],
    today: NaiveDate,
    week_start: WeekStart,
    tz: &Tz,
) -> Vec<DayCount> {
    let (start, _) = week_bounds(today, week_start);
    let created: Vec<NaiveDate> = records
        .iter()
        .map(|record| local_date(record.created_at, tz))
        .collect();

    (0..7)
        .map(|index| {
            let date = start + Duration::days(index);
            DayCount {
                date,
                label: date.format("%a").to_string(),
                count: created.iter().filter(|day| **day == date).count(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{records_on, week_bounds, weekly_activity, WeekStart};
    use crate::domain::{OutreachId, OutreachRecord, OutreachStatus, OutreachType, Platform};
    use crate::time::testing::SwitchingZone;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    fn created_on(id: &str, y: i32, m: u32, d: u32, h: u32) -> OutreachRecord {
        OutreachRecord {
            id: OutreachId::new(id).unwrap(),
            client_name: format!("client {id}"),
            platform: Platform::Email,
            outreach_type: OutreachType::ColdEmail,
            status: OutreachStatus::Waiting,
            follow_up_date: None,
            notes: None,
            created_at: Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
        }
    }

    fn created_at(id: &str, at: chrono::DateTime<Utc>) -> OutreachRecord {
        OutreachRecord {
            created_at: at,
            ..created_on(id, 2030, 1, 1, 0)
        }
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn week_bounds_sunday_and_monday_start() {
        // 2030-01-16 is a Wednesday.
        let today = NaiveDate::from_ymd_opt(2030, 1, 16).unwrap();
        assert_eq!(
            week_bounds(today, WeekStart::Sunday),
            (
                NaiveDate::from_ymd_opt(2030, 1, 13).unwrap(),
                NaiveDate::from_ymd_opt(2030, 1, 19).unwrap()
            )
        );
        assert_eq!(
            week_bounds(today, WeekStart::Monday),
            (
                NaiveDate::from_ymd_opt(2030, 1, 14).unwrap(),
                NaiveDate::from_ymd_opt(2030, 1, 20).unwrap()
            )
        );
    }

    #[test]
    fn one_record_per_day_gives_one_per_bucket() {
        let records: Vec<_> = (13..=19)
            .map(|day| created_on(&day.to_string(), 2030, 1, day, 10))
            .collect();
        let today = NaiveDate::from_ymd_opt(2030, 1, 16).unwrap();
        let weekly = weekly_activity(&records, today, WeekStart::Sunday, &utc());

        assert_eq!(weekly.len(), 7);
        assert!(weekly.iter().all(|day| day.count == 1));
        assert_eq!(weekly[0].label, "Sun");
        assert_eq!(weekly[6].label, "Sat");
    }

    #[test]
    fn records_outside_week_are_ignored() {
        let records = vec![
            created_on("a", 2030, 1, 12, 10),
            created_on("b", 2030, 1, 15, 10),
            created_on("c", 2030, 1, 15, 18),
            created_on("d", 2030, 1, 20, 10),
        ];
        let today = NaiveDate::from_ymd_opt(2030, 1, 16).unwrap();
        let weekly = weekly_activity(&records, today, WeekStart::Sunday, &utc());
        let counts: Vec<usize> = weekly.iter().map(|day| day.count).collect();
        assert_eq!(counts, vec![0, 0, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn records_on_uses_local_calendar_day() {
        let records = vec![created_on("late", 2030, 1, 15, 23)];
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let jan_15 = NaiveDate::from_ymd_opt(2030, 1, 15).unwrap();
        let jan_16 = NaiveDate::from_ymd_opt(2030, 1, 16).unwrap();

        assert_eq!(records_on(&records, jan_15, &utc()).len(), 1);
        assert!(records_on(&records, jan_15, &plus_two).is_empty());
        assert_eq!(records_on(&records, jan_16, &plus_two).len(), 1);
    }

    #[test]
    fn bucketing_follows_offset_of_each_record() {
        // 23:30 local on Mon 2026-06-15 (+10) and Mon 2026-10-19 (+11).
        let records = vec![
            created_at("winter", Utc.with_ymd_and_hms(2026, 6, 15, 13, 30, 0).unwrap()),
            created_at("summer", Utc.with_ymd_and_hms(2026, 10, 19, 12, 30, 0).unwrap()),
        ];
        let zone = SwitchingZone::sydney_2026();

        let june_15 = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let oct_19 = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(records_on(&records, june_15, &zone)[0].id.as_str(), "winter");
        assert_eq!(records_on(&records, oct_19, &zone)[0].id.as_str(), "summer");

        let weekly = weekly_activity(&records, june_15, WeekStart::Monday, &zone);
        assert_eq!(weekly[0].date, june_15);
        assert_eq!(weekly[0].count, 1);
    }

    #[test]
    fn week_start_parses() {
        assert_eq!("Monday".parse::<WeekStart>().unwrap(), WeekStart::Monday);
        assert!("friday".parse::<WeekStart>().is_err());
    }
}
