//! Per-entry fetch-or-placeholder.

use super::AcquireOptions;
use crate::catalog::{CatalogEntry, Sample};
use crate::fetch::{classify, FetchError, HttpFetcher};
use crate::metadata::{sidecar_path, MetadataRecord};
use crate::placeholder;
use crate::storage::{self, WriteStatus};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Why a placeholder was written instead of a sample.
#[derive(Debug)]
pub enum FallbackReason {
    /// The entry has no sample URL (auth-gated or too large to redistribute).
    NoUrl,
    /// Every candidate URL failed; one error per URL, in order.
    FetchFailed(Vec<(String, FetchError)>),
}

#[derive(Debug)]
pub enum EntryOutcome {
    Downloaded {
        path: PathBuf,
        url: String,
        bytes: u64,
        status: WriteStatus,
    },
    Placeholder {
        path: PathBuf,
        reason: FallbackReason,
        status: WriteStatus,
    },
    /// Writing to the local filesystem failed.
    Failed { error: anyhow::Error },
}

impl EntryOutcome {
    /// File written (or confirmed unchanged) for this entry.
    pub fn path(&self) -> Option<&Path> {
        match self {
            EntryOutcome::Downloaded { path, .. } | EntryOutcome::Placeholder { path, .. } => {
                Some(path)
            }
            EntryOutcome::Failed { .. } => None,
        }
    }
}

/// Fetches the entry's sample into `data_dir`, or writes its placeholder.
/// Never returns an error: local write failures become `EntryOutcome::Failed`.
pub fn acquire_entry(
    entry: &CatalogEntry,
    data_dir: &Path,
    fetcher: &HttpFetcher,
    opts: AcquireOptions,
) -> EntryOutcome {
    let reason = match &entry.sample {
        None => FallbackReason::NoUrl,
        Some(sample) => match fetch_first(sample, fetcher) {
            Ok((url, body)) => {
                return match store_sample(entry, sample, data_dir, &url, &body, opts) {
                    Ok((path, status)) => EntryOutcome::Downloaded {
                        path,
                        url,
                        bytes: body.len() as u64,
                        status,
                    },
                    Err(error) => {
                        tracing::error!(slug = %entry.slug, "failed to store sample: {:#}", error);
                        EntryOutcome::Failed { error }
                    }
                };
            }
            Err(errors) => FallbackReason::FetchFailed(errors),
        },
    };

    let fetch_failed = matches!(reason, FallbackReason::FetchFailed(_));
    let path = entry.placeholder_path(data_dir);
    let text = placeholder::render(entry, fetch_failed);
    match storage::write_if_changed(&path, text.as_bytes()) {
        Ok(status) => {
            tracing::info!(slug = %entry.slug, path = %path.display(), ?status, "placeholder written");
            EntryOutcome::Placeholder {
                path,
                reason,
                status,
            }
        }
        Err(error) => {
            tracing::error!(slug = %entry.slug, "failed to write placeholder: {:#}", error);
            EntryOutcome::Failed { error }
        }
    }
}

/// Tries each candidate URL once, in order. Returns the first body or every error.
fn fetch_first(
    sample: &Sample,
    fetcher: &HttpFetcher,
) -> Result<(String, Vec<u8>), Vec<(String, FetchError)>> {
    let mut errors = Vec::new();
    for url in &sample.urls {
        match fetcher.get(url) {
            Ok(body) => return Ok((url.clone(), body)),
            Err(e) => {
                tracing::warn!(url = %url, kind = %classify(&e), "sample fetch failed: {}", e);
                errors.push((url.clone(), e));
            }
        }
    }
    Err(errors)
}

fn store_sample(
    entry: &CatalogEntry,
    sample: &Sample,
    data_dir: &Path,
    url: &str,
    body: &[u8],
    opts: AcquireOptions,
) -> Result<(PathBuf, WriteStatus)> {
    let path = entry.dir(data_dir).join(&sample.file_name);
    let status = storage::write_if_changed(&path, body)?;
    tracing::info!(slug = %entry.slug, path = %path.display(), bytes = body.len(), ?status, "sample stored");

    if opts.write_metadata {
        let record = MetadataRecord::new(&sample.metadata, url, body);
        let sidecar = sidecar_path(&path);
        if let Err(e) = record
            .to_json()
            .and_then(|json| storage::write_if_changed(&sidecar, json.as_bytes()))
        {
            tracing::warn!(path = %sidecar.display(), "could not write metadata: {:#}", e);
        }
    }

    remove_stale_placeholder(entry, data_dir);
    Ok((path, status))
}

/// A failure placeholder from an earlier run is obsolete once the sample exists.
/// Only a file with exactly the text we would have written is removed.
fn remove_stale_placeholder(entry: &CatalogEntry, data_dir: &Path) {
    let path = entry.placeholder_path(data_dir);
    let expected = placeholder::render(entry, true);
    if let Ok(existing) = fs::read(&path) {
        if existing == expected.as_bytes() {
            match fs::remove_file(&path) {
                Ok(()) => tracing::debug!(path = %path.display(), "removed stale placeholder"),
                Err(e) => tracing::warn!(path = %path.display(), "could not remove stale placeholder: {}", e),
            }
        }
    }
}
