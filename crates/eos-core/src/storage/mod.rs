//! File writes under the data root.
//!
//! Every write goes to a `.part` temp file next to the destination, is synced,
//! then renamed over the destination, so an interrupted run never leaves a
//! truncated sample or placeholder behind.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Outcome of `write_if_changed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    /// Destination already held exactly these bytes.
    Unchanged,
}

/// Path for the temp file: appends `.part` to the final path (e.g. `a.png` → `a.png.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Write `data` to `path`, creating parent directories. Replaces any existing file atomically.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    let tp = temp_path(path);
    let result = (|| -> Result<()> {
        let mut file = File::create(&tp)
            .with_context(|| format!("failed to create temp file: {}", tp.display()))?;
        file.write_all(data)
            .with_context(|| format!("write {}", tp.display()))?;
        file.sync_all().context("storage sync failed")?;
        drop(file);
        fs::rename(&tp, path).with_context(|| {
            format!("failed to rename {} to {}", tp.display(), path.display())
        })
    })();
    if result.is_err() {
        let _ = fs::remove_file(&tp);
    }
    result
}

/// Like `write_atomic`, but leaves the file untouched when it already has these exact bytes.
pub fn write_if_changed(path: &Path, data: &[u8]) -> Result<WriteStatus> {
    match fs::read(path) {
        Ok(existing) if existing == data => return Ok(WriteStatus::Unchanged),
        _ => {}
    }
    write_atomic(path, data)?;
    Ok(WriteStatus::Written)
}
