use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use outreach_store::error::StoreError;
use outreach_store::paths;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BackupArgs {
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct BackupReport {
    output: String,
    size_bytes: u64,
}

pub fn backup(ctx: &Context<'_>, args: BackupArgs) -> Result<()> {
    let out = match args.out {
        Some(path) => path,
        None => paths::backup_path()?,
    };

    let size_bytes = match ctx.store.backup_to(&out) {
        Ok(size) => size,
        Err(err @ StoreError::InvalidBackupPath(_)) => {
            return Err(err)
                .with_context(|| format!("backup path matches database: {}", out.display()));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("backup database to {}", out.display()));
        }
    };

    if ctx.json {
        return print_json(&BackupReport {
            output: out.display().to_string(),
            size_bytes,
        });
    }

    println!("Backup written to {}", out.display());
    Ok(())
}
