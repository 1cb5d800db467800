use crate::analytics::activity::{records_on, weekly_activity, DayCount, WeekStart};
use crate::analytics::counts::{platform_counts, status_counts, CountEntry};
use crate::domain::{OutreachRecord, OutreachStatus, Platform};
use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub contacted_today: usize,
    pub deals_today: usize,
    pub pending: usize,
    pub upcoming_follow_ups: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total: usize,
    pub deals_closed: usize,
    pub success_rate: f64,
    pub weekly: Vec<DayCount>,
    pub by_status: Vec<CountEntry<OutreachStatus>>,
    pub by_platform: Vec<CountEntry<Platform>>,
}

pub fn deals_closed(records: &[OutreachRecord]) -> usize {
    count_status(records.iter(), OutreachStatus::DealDone)
}

pub fn pending_count(records: &[OutreachRecord]) -> usize {
    count_status(records.iter(), OutreachStatus::Waiting)
}

/// Percentage of records marked Deal Done, rounded to one decimal place.
/// Zero for an empty collection.
pub fn success_rate(records: &[OutreachRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let ratio = deals_closed(records) as f64 / records.len() as f64;
    (ratio * 1000.0).round() / 10.0
}

pub fn upcoming_follow_ups(records: &[OutreachRecord], today: NaiveDate) -> usize {
    records
        .iter()
        .filter(|record| matches!(record.follow_up_date, Some(date) if date >= today))
        .count()
}

pub fn dashboard_stats<Tz: TimeZone>(
    records: &[OutreachRecord],
    today: NaiveDate,
    tz: &Tz,
) -> DashboardStats {
    let todays = records_on(records, today, tz);
    DashboardStats {
        contacted_today: todays.len(),
        deals_today: count_status(todays.iter().copied(), OutreachStatus::DealDone),
        pending: pending_count(records),
        upcoming_follow_ups: upcoming_follow_ups(records, today),
    }
}

pub fn analytics_summary<Tz: TimeZone>(
    records: &[OutreachRecord],
    today: NaiveDate,
    week_start: WeekStart,
    tz: &Tz,
) -> AnalyticsSummary {
    AnalyticsSummary {
        total: records.len(),
        deals_closed: deals_closed(records),
        success_rate: success_rate(records),
        weekly: weekly_activity(records, today, week_start, tz),
        by_status: status_counts(records),
        by_platform: platform_counts(records),
    }
}

fn count_status<'a, I>(records: I, status: OutreachStatus) -> usize
where
    I: Iterator<Item = &'a OutreachRecord>,
{
    records.filter(|record| record.status == status).count()
}
