//! Placeholder README text for data that could not be fetched or redistributed.

use crate::catalog::CatalogEntry;

/// Renders the placeholder for `entry`. When `fetch_failed` is set (the entry
/// has a sample but no candidate URL worked) the text opens with a note naming
/// the expected file. Output depends only on the catalog entry, so re-runs
/// write identical files.
pub fn render(entry: &CatalogEntry, fetch_failed: bool) -> String {
    let mut out = String::new();
    if fetch_failed {
        if let Some(sample) = &entry.sample {
            out.push_str(&format!(
                "Could not fetch {} automatically.\n",
                sample.file_name
            ));
        }
    }
    out.push_str(&entry.placeholder);
    if !entry.placeholder.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format!("Provider: {}\n", entry.provider));
    out.push_str(&format!("Documentation: {}\n", entry.docs_url));
    out
}
