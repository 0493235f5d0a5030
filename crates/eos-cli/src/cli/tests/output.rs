//! Tests for per-entry console lines.

use crate::cli::commands::describe;
use eos_core::acquire::{EntryOutcome, FallbackReason};
use eos_core::catalog::Catalog;
use eos_core::fetch::FetchError;
use eos_core::storage::WriteStatus;
use std::path::PathBuf;

#[test]
fn describe_download() {
    let cat = Catalog::builtin("2020-01-01").unwrap();
    let line = describe(
        cat.get("earth_observatory").unwrap(),
        &EntryOutcome::Downloaded {
            path: PathBuf::from("data/earth_observatory/sample_earth_observatory.jpg"),
            url: "https://example.org/x.jpg".to_string(),
            bytes: 1234,
            status: WriteStatus::Unchanged,
        },
    );
    assert_eq!(
        line,
        "- NASA Earth Observatory sample downloaded: data/earth_observatory/sample_earth_observatory.jpg (1234 bytes, unchanged)"
    );
}

#[test]
fn describe_placeholders() {
    let cat = Catalog::builtin("2020-01-01").unwrap();
    let gated = describe(
        cat.get("sedac").unwrap(),
        &EntryOutcome::Placeholder {
            path: PathBuf::from("data/sedac/README.txt"),
            reason: FallbackReason::NoUrl,
            status: WriteStatus::Written,
        },
    );
    assert_eq!(
        gated,
        "- NASA SEDAC placeholder written: data/sedac/README.txt (no public sample)"
    );

    let failed = describe(
        cat.get("wri").unwrap(),
        &EntryOutcome::Placeholder {
            path: PathBuf::from("data/wri/README.txt"),
            reason: FallbackReason::FetchFailed(vec![(
                "https://example.org/a.csv".to_string(),
                FetchError::Status(404),
            )]),
            status: WriteStatus::Written,
        },
    );
    assert!(failed.ends_with("(download failed: HTTP 404)"), "{failed}");
}

#[test]
fn describe_failure() {
    let cat = Catalog::builtin("2020-01-01").unwrap();
    let line = describe(
        cat.get("ghsl").unwrap(),
        &EntryOutcome::Failed {
            error: anyhow::anyhow!("permission denied"),
        },
    );
    assert_eq!(line, "- GHSL (EU Copernicus) skipped: permission denied");
}
