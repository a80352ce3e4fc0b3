mod analysis;
mod config;
mod manager;
mod model;
mod stats;

use crate::config::Config;
use crate::manager::Manager;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML file with `input` and `output` paths.
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV dataset to aggregate.
    #[arg(long)]
    input: Option<PathBuf>,

    /// CSV file to write the per-state means to.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let cfg = match &args.config {
        Some(file) => Config::from_file(file).context("failed to construct cfg")?,
        None => Config::default(),
    };
    let cfg = cfg.with_overrides(args.input, args.output);

    let mgr = Manager::new(cfg).context("failed to construct mgr")?;
    mgr.run_aggregation()?;

    Ok(())
}
