use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{
    clock, format_record_line, parse_optional_date, parse_outreach_id, parse_outreach_type,
    parse_platform, parse_status,
};
use anyhow::Result;
use clap::{ArgAction, Args};
use outreach_core::filter::parse_filter;
use outreach_core::time::{format_local_datetime, now_utc};
use outreach_core::{normalize_optional_text, OutreachNew, OutreachRecord, OutreachStatus};

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub client: String,
    #[arg(long)]
    pub platform: String,
    #[arg(long = "type", value_name = "TYPE")]
    pub outreach_type: String,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub follow_up: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(long)]
    pub client: Option<String>,
    #[arg(long)]
    pub platform: Option<String>,
    #[arg(long = "type", value_name = "TYPE")]
    pub outreach_type: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub follow_up: Option<String>,
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "follow_up")]
    pub clear_follow_up: bool,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// e.g. `platform:linkedin status:waiting acme`
    #[arg(long)]
    pub filter: Option<String>,
}

pub fn add_outreach(ctx: &mut Context<'_>, args: AddArgs) -> Result<()> {
    let input = OutreachNew {
        client_name: args.client,
        platform: parse_platform(&args.platform)?,
        outreach_type: parse_outreach_type(&args.outreach_type)?,
        status: match args.status {
            Some(raw) => parse_status(&raw)?,
            None => OutreachStatus::Waiting,
        },
        follow_up_date: parse_optional_date(args.follow_up.as_deref())?,
        notes: args.notes,
    };

    let record = ctx.outreaches.add(now_utc(), input)?;
    if ctx.json {
        print_json(&record)?;
    } else {
        println!("added {} {}", record.id, record.client_name);
    }
    Ok(())
}

pub fn update_outreach(ctx: &mut Context<'_>, args: UpdateArgs) -> Result<()> {
    let id = parse_outreach_id(&args.id)?;
    let mut record = ctx
        .outreaches
        .get(&id)
        .cloned()
        .ok_or_else(|| not_found("outreach not found"))?;

    let mut changed = false;
    if let Some(client) = args.client {
        record.client_name = client.trim().to_string();
        changed = true;
    }
    if let Some(platform) = args.platform {
        record.platform = parse_platform(&platform)?;
        changed = true;
    }
    if let Some(outreach_type) = args.outreach_type {
        record.outreach_type = parse_outreach_type(&outreach_type)?;
        changed = true;
    }
    if let Some(status) = args.status {
        record.status = parse_status(&status)?;
        changed = true;
    }
    if args.clear_follow_up {
        record.follow_up_date = None;
        changed = true;
    } else if let Some(date) = parse_optional_date(args.follow_up.as_deref())? {
        record.follow_up_date = Some(date);
        changed = true;
    }
    if let Some(notes) = args.notes {
        record.notes = normalize_optional_text(notes);
        changed = true;
    }

    if !changed {
        return Err(invalid_input("no updates provided"));
    }

    ctx.outreaches.update(record.clone())?;
    if ctx.json {
        print_json(&record)?;
    } else {
        println!("updated {} {}", record.id, record.client_name);
    }
    Ok(())
}

pub fn show_outreach(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_outreach_id(&args.id)?;
    let record = ctx
        .outreaches
        .get(&id)
        .ok_or_else(|| not_found("outreach not found"))?;

    if ctx.json {
        return print_json(record);
    }

    let tz = clock().tz;
    println!("{}", record.client_name);
    println!("id: {}", record.id);
    println!("platform: {}", record.platform);
    println!("type: {}", record.outreach_type);
    println!("status: {}", record.status);
    if let Some(date) = record.follow_up_date {
        println!("follow-up: {}", date.format("%Y-%m-%d"));
    }
    if let Some(notes) = &record.notes {
        println!("notes: {}", notes);
    }
    println!("created: {}", format_local_datetime(record.created_at, &tz));
    Ok(())
}

pub fn list_outreaches(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let filter = parse_filter(args.filter.as_deref().unwrap_or(""))?;
    let snapshot = ctx.outreaches.snapshot();
    let matches: Vec<&OutreachRecord> = filter.apply(snapshot.records);

    if ctx.json {
        return print_json(&matches);
    }

    if matches.is_empty() {
        println!("No outreaches found");
        return Ok(());
    }
    let tz = clock().tz;
    for record in matches {
        println!("{}", format_record_line(record, &tz));
    }
    Ok(())
}
