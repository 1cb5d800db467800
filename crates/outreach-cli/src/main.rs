mod commands;
mod error;
mod notify;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{analytics, backup, completions, dashboard, export, records, Context};
use crate::error::{exit_code_for, report_error};
use crate::notify::notifier_for;
use outreach_config as config;
use outreach_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "outreach", version, about = "Track client outreach from the terminal")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Record a new outreach
    Add(records::AddArgs),
    /// Edit an existing outreach
    Update(records::UpdateArgs),
    Show(records::ShowArgs),
    List(records::ListArgs),
    /// Today's tiles and activity
    Dashboard,
    Analytics(analytics::AnalyticsArgs),
    #[command(subcommand)]
    Export(export::ExportCommand),
    Backup(backup::BackupArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let command = match command {
        Command::Completions(args) => return completions::emit(args),
        command => command,
    };

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) if path.exists() => debug!(path = %path.display(), "config resolved"),
            Ok(path) => debug!(path = %path.display(), "config missing, using defaults"),
            Err(err) => debug!(error = %err, "config unavailable"),
        }
    }

    let db_path = paths::resolve_db_path(db_path).with_context(|| "resolve database path")?;
    debug!(path = %db_path.display(), "database path resolved");

    let store = Store::open(&db_path)
        .with_context(|| format!("open database {}", db_path.display()))?;
    store.migrate().with_context(|| "run migrations")?;

    let outreaches = store.outreaches(&app_config.slot_key, notifier_for(&app_config));
    debug!(
        key = outreaches.slot().key(),
        count = outreaches.snapshot().records.len(),
        "outreach slot opened"
    );
    let mut ctx = Context {
        store: &store,
        outreaches,
        json,
        config: &app_config,
    };

    match command {
        Command::Add(args) => records::add_outreach(&mut ctx, args),
        Command::Update(args) => records::update_outreach(&mut ctx, args),
        Command::Show(args) => records::show_outreach(&ctx, args),
        Command::List(args) => records::list_outreaches(&ctx, args),
        Command::Dashboard => dashboard::dashboard(&ctx),
        Command::Analytics(args) => analytics::analytics(&ctx, args),
        Command::Export(cmd) => match cmd {
            export::ExportCommand::Csv(args) => export::export_csv(&ctx, args),
            export::ExportCommand::Json(args) => export::export_json(&ctx, args),
        },
        Command::Backup(args) => backup::backup(&ctx, args),
        Command::Completions(_) => {
            unreachable!("completions command handled before store initialization")
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
