//! `eosamples fetch` – fetch samples or write placeholders for each catalog entry.

use anyhow::{Context, Result};
use eos_core::acquire::{acquire_all, AcquireOptions, EntryOutcome, FallbackReason};
use eos_core::catalog::{Catalog, CatalogEntry};
use eos_core::config::EosConfig;
use eos_core::fetch::{classify, HttpFetcher};
use eos_core::storage::WriteStatus;

use crate::cli::FetchArgs;

pub fn run_fetch(cfg: &EosConfig, args: &FetchArgs) -> Result<()> {
    let date = args.date.as_deref().unwrap_or(&cfg.worldview_date);
    let mut catalog = Catalog::builtin(date).context("building provider catalog")?;
    if !args.only.is_empty() {
        catalog = catalog.select(args.only.as_slice())?;
    }
    let data_dir = args.data_dir.clone().unwrap_or_else(|| cfg.data_dir.clone());
    let mut opts = AcquireOptions::from_config(cfg);
    if args.no_metadata {
        opts.write_metadata = false;
    }
    let fetcher = HttpFetcher::from_config(cfg);

    println!("Downloading sample datasets into {}...", data_dir.display());
    let report = acquire_all(&catalog, &data_dir, &fetcher, opts, |entry, outcome| {
        println!("{}", describe(entry, outcome));
    });
    println!("Completed with {} successful downloads", report.downloaded());
    if report.failures() > 0 {
        println!("{} entries could not be written; see the log for details", report.failures());
    }
    Ok(())
}

/// One console line per entry.
pub(crate) fn describe(entry: &CatalogEntry, outcome: &EntryOutcome) -> String {
    match outcome {
        EntryOutcome::Downloaded {
            path,
            bytes,
            status,
            ..
        } => {
            let note = match status {
                WriteStatus::Written => "",
                WriteStatus::Unchanged => ", unchanged",
            };
            format!(
                "- {} sample downloaded: {} ({} bytes{})",
                entry.provider,
                path.display(),
                bytes,
                note
            )
        }
        EntryOutcome::Placeholder { path, reason, .. } => {
            let why = match reason {
                FallbackReason::NoUrl => "no public sample".to_string(),
                FallbackReason::FetchFailed(errors) => {
                    let kinds: Vec<String> =
                        errors.iter().map(|(_, e)| classify(e).to_string()).collect();
                    format!("download failed: {}", kinds.join(", "))
                }
            };
            format!(
                "- {} placeholder written: {} ({})",
                entry.provider,
                path.display(),
                why
            )
        }
        EntryOutcome::Failed { error } => {
            format!("- {} skipped: {:#}", entry.provider, error)
        }
    }
}
