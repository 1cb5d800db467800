use anyhow::Result;
use outreach_config::AppConfig;
use outreach_store::{OutreachStore, SqliteSlot, Store};
use serde::Serialize;
use std::io::{self, Write};

pub mod analytics;
pub mod backup;
pub mod completions;
pub mod dashboard;
pub mod export;
pub mod records;

pub struct Context<'a> {
    pub store: &'a Store,
    pub outreaches: OutreachStore<SqliteSlot<'a>>,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
