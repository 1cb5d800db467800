use crate::commands::{print_json, Context};
use crate::util::{clock, parse_label};
use anyhow::Result;
use clap::Args;
use outreach_core::analytics::{analytics_summary, WeekStart};

const BAR_WIDTH: usize = 30;

#[derive(Debug, Args)]
pub struct AnalyticsArgs {
    /// Overrides `week_start` from the config (sunday|monday)
    #[arg(long)]
    pub week_start: Option<String>,
}

pub fn analytics(ctx: &Context<'_>, args: AnalyticsArgs) -> Result<()> {
    let week_start: WeekStart = match args.week_start {
        Some(raw) => parse_label(&raw)?,
        None => ctx.config.week_start,
    };
    let clock = clock();
    let summary = analytics_summary(
        ctx.outreaches.snapshot().records,
        clock.today,
        week_start,
        &clock.tz,
    );

    if ctx.json {
        return print_json(&summary);
    }

    println!("Total Outreaches: {}", summary.total);
    println!("Deals Closed: {}", summary.deals_closed);
    println!("Success Rate: {:.1}%", summary.success_rate);

    println!();
    println!("Weekly Activity");
    let peak = summary
        .weekly
        .iter()
        .map(|day| day.count)
        .max()
        .unwrap_or(0);
    for day in &summary.weekly {
        println!("  {} {:>3} {}", day.label, day.count, bar(day.count, peak));
    }

    println!();
    println!("Status Distribution");
    for entry in &summary.by_status {
        println!("  {}: {}", entry.name, entry.value);
    }

    println!();
    println!("Platform Distribution");
    for entry in &summary.by_platform {
        println!("  {}: {}", entry.name, entry.value);
    }
    Ok(())
}

fn bar(count: usize, peak: usize) -> String {
    if peak == 0 {
        return String::new();
    }
    "#".repeat((count * BAR_WIDTH).div_ceil(peak))
}
