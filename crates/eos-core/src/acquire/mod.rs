//! Fetch-or-placeholder run over the catalog.
//!
//! Entries are processed sequentially in catalog order. Every entry yields
//! exactly one outcome; no per-entry failure stops the run.

mod entry;

pub use entry::{acquire_entry, EntryOutcome, FallbackReason};

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::EosConfig;
use crate::fetch::HttpFetcher;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct AcquireOptions {
    /// Write the JSON sidecar next to downloaded samples.
    pub write_metadata: bool,
}

impl Default for AcquireOptions {
    fn default() -> Self {
        Self {
            write_metadata: true,
        }
    }
}

impl AcquireOptions {
    pub fn from_config(cfg: &EosConfig) -> Self {
        Self {
            write_metadata: cfg.write_metadata,
        }
    }
}

/// Outcome for one catalog entry.
#[derive(Debug)]
pub struct EntryReport {
    pub slug: String,
    pub provider: String,
    pub outcome: EntryOutcome,
}

/// Per-entry outcomes of a run, in catalog order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub entries: Vec<EntryReport>,
}

impl RunReport {
    pub fn downloaded(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Downloaded { .. }))
    }

    pub fn placeholders(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Placeholder { .. }))
    }

    pub fn failures(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}

/// Runs `acquire_entry` for every catalog entry. `on_entry` is called after
/// each entry (the CLI prints a line per entry from it).
pub fn acquire_all<F>(
    catalog: &Catalog,
    data_dir: &Path,
    fetcher: &HttpFetcher,
    opts: AcquireOptions,
    mut on_entry: F,
) -> RunReport
where
    F: FnMut(&CatalogEntry, &EntryOutcome),
{
    let mut report = RunReport::default();
    for entry in catalog.entries() {
        let outcome = acquire_entry(entry, data_dir, fetcher, opts);
        on_entry(entry, &outcome);
        report.entries.push(EntryReport {
            slug: entry.slug.clone(),
            provider: entry.provider.clone(),
            outcome,
        });
    }
    tracing::info!(
        downloaded = report.downloaded(),
        placeholders = report.placeholders(),
        failures = report.failures(),
        "acquisition run finished"
    );
    report
}
