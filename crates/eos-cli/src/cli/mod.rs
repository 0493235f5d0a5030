//! CLI for the Earth-observation sample fetcher.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use eos_core::config::{self, EosConfig};
use std::path::{Path, PathBuf};

use commands::{run_fetch, run_list};

/// Top-level CLI. With no subcommand, fetches every catalog entry.
#[derive(Debug, Parser)]
#[command(name = "eosamples")]
#[command(about = "Fetch small Earth-observation samples or write placeholder instructions", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/eosamples/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch samples (or write placeholders) for catalog entries.
    Fetch(FetchArgs),

    /// Print the provider catalog.
    List {
        /// Worldview snapshot date (YYYY-MM-DD) used to build the sample URL.
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },
}

#[derive(Debug, Default, Args)]
pub struct FetchArgs {
    /// Root directory of the provider tree (overrides config `data_dir`).
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Worldview snapshot date, YYYY-MM-DD (overrides config `worldview_date`).
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Only process these providers (by slug, repeatable).
    #[arg(long, value_name = "SLUG")]
    pub only: Vec<String>,

    /// Do not write JSON metadata sidecars next to samples.
    #[arg(long)]
    pub no_metadata: bool,
}

/// Loads config, or logs and falls back to defaults: a broken config file must not stop a run.
fn load_config(path: Option<&Path>) -> EosConfig {
    let loaded = match path {
        Some(p) => config::load_or_init_at(p),
        None => config::load_or_init(),
    };
    match loaded {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("could not load config, using defaults: {:#}", err);
            EosConfig::default()
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        run(Cli::parse())
    }
}

/// Dispatches a parsed command line. An `Err` here is what makes the process exit non-zero.
pub fn run(cli: Cli) -> Result<()> {
    let cfg = load_config(cli.config.as_deref());
    tracing::debug!("loaded config: {:?}", cfg);

    match cli.command {
        None => run_fetch(&cfg, &FetchArgs::default())?,
        Some(CliCommand::Fetch(args)) => run_fetch(&cfg, &args)?,
        Some(CliCommand::List { date }) => run_list(&cfg, date.as_deref())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
