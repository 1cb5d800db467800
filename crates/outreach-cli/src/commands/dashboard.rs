use crate::commands::{print_json, Context};
use crate::util::{clock, format_record_line};
use anyhow::Result;
use outreach_core::analytics::{dashboard_stats, records_on};
use outreach_core::DashboardDto;

pub fn dashboard(ctx: &Context<'_>) -> Result<()> {
    let clock = clock();
    let records = ctx.outreaches.snapshot().records;
    let stats = dashboard_stats(records, clock.today, &clock.tz);
    let today = records_on(records, clock.today, &clock.tz);

    if ctx.json {
        let dto = DashboardDto {
            stats,
            today: today.into_iter().cloned().collect(),
        };
        return print_json(&dto);
    }

    println!("Contacted Today: {}", stats.contacted_today);
    println!("Deals Closed Today: {}", stats.deals_today);
    println!("Pending Responses: {}", stats.pending);
    println!("Upcoming Follow-ups: {}", stats.upcoming_follow_ups);
    println!();
    println!("Today's Outreach");
    if today.is_empty() {
        println!("  nothing yet");
    }
    for record in today {
        println!("  {}", format_record_line(record, &clock.tz));
    }
    Ok(())
}
