pub mod activity;
pub mod counts;
pub mod stats;

pub use activity::{records_on, week_bounds, weekly_activity, DayCount, WeekStart};
pub use counts::{platform_counts, status_counts, CountEntry};
pub use stats::{
    analytics_summary, dashboard_stats, deals_closed, pending_count, success_rate,
    upcoming_follow_ups, AnalyticsSummary, DashboardStats,
};
