use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use notelog::config::Config;
use notelog::report::{collect_notes, write_json, write_summary, CollectArgs};
use tracing::debug;

#[derive(Subcommand, Debug)]
enum Action {
    /// Print all collected notes as one block
    Render(CollectArgs),
    /// Print the prevailing category and which categories are present
    Summary(CollectArgs),
}

#[derive(Parser, Debug)]
#[command(author, version)]
struct Args {
    #[command(subcommand)]
    action: Action,

    /// Path to config file. Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also write debug logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let _guard = notelog_lib::setup_logging(args.log_file.as_deref(), "notelog")?;

    let config_path = match args.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    let (collect, summary) = match args.action {
        Action::Render(collect) => (collect, false),
        Action::Summary(collect) => (collect, true),
    };

    let log = collect_notes(&config, &collect, std::io::stdin().lock())
        .context("collecting notes")?;
    debug!(notes = log.len(), "collected notes");

    let mut stdout = std::io::stdout().lock();
    if collect.json {
        write_json(&mut stdout, &log)?;
    } else if summary {
        write_summary(&mut stdout, &log)?;
    } else {
        write!(stdout, "{log}")?;
    }
    stdout.flush()?;

    if collect.fails(&config, &log) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
