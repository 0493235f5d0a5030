//! `eosamples list` – print the provider catalog.

use anyhow::{Context, Result};
use eos_core::catalog::{Catalog, CatalogEntry};
use eos_core::config::EosConfig;

pub fn run_list(cfg: &EosConfig, date: Option<&str>) -> Result<()> {
    let date = date.unwrap_or(&cfg.worldview_date);
    let catalog = Catalog::builtin(date).context("building provider catalog")?;
    println!("{:<18} {:<12} {:<46} {}", "SLUG", "KIND", "PROVIDER", "DOCS");
    for entry in catalog.entries() {
        println!("{}", row(entry));
    }
    Ok(())
}

fn row(entry: &CatalogEntry) -> String {
    let kind = if entry.sample.is_some() {
        "sample"
    } else {
        "placeholder"
    };
    format!(
        "{:<18} {:<12} {:<46} {}",
        entry.slug, kind, entry.provider, entry.docs_url
    )
}
