use crate::commands::{print_json, Context};
use crate::util::clock;
use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use outreach_core::export::{csv_file_name, export_csv as render_csv};
use outreach_core::ExportReportDto;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
pub enum ExportCommand {
    /// Spreadsheet export; defaults to outreach_data_<date>.csv in the current directory
    Csv(ExportArgs),
    /// The stored collection as JSON; printed to stdout without --out
    Json(ExportArgs),
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn export_csv(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let clock = clock();
    let export = render_csv(ctx.outreaches.snapshot().records, &clock.tz);
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(csv_file_name(clock.today)));
    write_export(ctx, &out, &export.data, export.count)
}

pub fn export_json(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let records = ctx.outreaches.snapshot().records;
    match args.out {
        Some(out) => {
            let data = serde_json::to_string_pretty(records)?;
            write_export(ctx, &out, &data, records.len())
        }
        None => print_json(&records),
    }
}

fn write_export(ctx: &Context<'_>, path: &Path, data: &str, count: usize) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create export directory {}", parent.display()))?;
        }
    }
    fs::write(path, data).with_context(|| format!("write export file {}", path.display()))?;

    if ctx.json {
        return print_json(&ExportReportDto {
            output: path.display().to_string(),
            count,
        });
    }
    println!("Exported {} outreaches to {}", count, path.display());
    Ok(())
}
