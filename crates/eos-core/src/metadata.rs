//! Metadata sidecar written next to each downloaded sample.
//!
//! The sidecar is pretty-printed JSON with keys in sorted order and no
//! timestamps, so identical downloads produce identical sidecars.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Suffix appended to a sample's file name for its metadata sidecar.
pub const SIDECAR_SUFFIX: &str = ".meta.json";

/// Descriptive fields for a sample, fixed in the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SampleMetadata {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f64; 4]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<[u32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SampleMetadata {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            ..Self::default()
        }
    }

    pub fn title(mut self, v: &str) -> Self {
        self.title = Some(v.to_string());
        self
    }

    pub fn layer(mut self, v: &str) -> Self {
        self.layer = Some(v.to_string());
        self
    }

    pub fn projection(mut self, v: &str) -> Self {
        self.projection = Some(v.to_string());
        self
    }

    pub fn bbox(mut self, v: [f64; 4]) -> Self {
        self.bbox = Some(v);
        self
    }

    pub fn size(mut self, v: [u32; 2]) -> Self {
        self.size = Some(v);
        self
    }

    pub fn format(mut self, v: &str) -> Self {
        self.format = Some(v.to_string());
        self
    }

    pub fn license(mut self, v: &str) -> Self {
        self.license = Some(v.to_string());
        self
    }

    pub fn notes(mut self, v: &str) -> Self {
        self.notes = Some(v.to_string());
        self
    }
}

/// What gets written to disk: catalog metadata plus facts about the fetched body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    #[serde(flatten)]
    pub sample: SampleMetadata,
    /// The candidate URL that succeeded.
    pub url: String,
    pub bytes: u64,
    /// Lowercase hex SHA-256 of the sample body.
    pub sha256: String,
}

impl MetadataRecord {
    pub fn new(sample: &SampleMetadata, url: &str, body: &[u8]) -> Self {
        Self {
            sample: sample.clone(),
            url: url.to_string(),
            bytes: body.len() as u64,
            sha256: sha256_hex(body),
        }
    }

    /// Pretty JSON (2-space indent) with sorted keys and a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        // serde_json::Map is a BTreeMap without the preserve_order feature, so
        // going through Value sorts keys, flattened ones included.
        let value = serde_json::to_value(self).context("serialize metadata")?;
        let mut out = serde_json::to_string_pretty(&value).context("serialize metadata")?;
        out.push('\n');
        Ok(out)
    }
}

/// Sidecar path: the sample path with `.meta.json` appended, so it can never
/// coincide with the sample itself (e.g. a `.json` sample).
pub fn sidecar_path(sample_path: &Path) -> PathBuf {
    let mut o = sample_path.as_os_str().to_owned();
    o.push(SIDECAR_SUFFIX);
    PathBuf::from(o)
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
