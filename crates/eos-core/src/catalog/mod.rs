//! Static catalog of Earth-observation providers.
//!
//! Each entry names a provider, the directory it owns under the data root,
//! an optional small sample to fetch, and the manual-acquisition instructions
//! written when no sample can be fetched.

mod builtin;
mod worldview;

pub use builtin::builtin_entries;
pub use worldview::WmsRequest;

use crate::metadata::{sidecar_path, SampleMetadata};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the placeholder written into a provider directory.
pub const PLACEHOLDER_FILE_NAME: &str = "README.txt";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("two catalog entries write to {0}")]
    DuplicateDestination(String),
    #[error("invalid provider slug {0:?}")]
    InvalidSlug(String),
    #[error("invalid sample file name {name:?} for {slug}")]
    InvalidFileName { slug: String, name: String },
    #[error("sample for {0} has no candidate URLs")]
    EmptySample(String),
    #[error("sample URL {url:?} for {slug} is not a valid http(s) URL")]
    InvalidUrl { slug: String, url: String },
    #[error("unknown provider {0:?}")]
    UnknownSlug(String),
    #[error("invalid date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// A small redistributable excerpt of a provider's dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Candidate URLs, tried in order; the first success wins.
    pub urls: Vec<String>,
    /// File name written inside the provider directory.
    pub file_name: String,
    /// Descriptive fields copied into the metadata sidecar.
    pub metadata: SampleMetadata,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub provider: String,
    pub slug: String,
    pub docs_url: String,
    pub sample: Option<Sample>,
    /// Manual-acquisition instructions (without the documentation link line).
    pub placeholder: String,
}

impl CatalogEntry {
    pub fn dir(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.slug)
    }

    /// Where a fetched sample lands. Entries without a sample have no destination.
    pub fn destination(&self, data_dir: &Path) -> Option<PathBuf> {
        self.sample
            .as_ref()
            .map(|s| self.dir(data_dir).join(&s.file_name))
    }

    pub fn placeholder_path(&self, data_dir: &Path) -> PathBuf {
        self.dir(data_dir).join(PLACEHOLDER_FILE_NAME)
    }

    /// Paths (relative to the data root) this entry may write.
    fn owned_paths(&self) -> Vec<PathBuf> {
        let root = Path::new("");
        let mut paths = vec![self.placeholder_path(root)];
        if let Some(dest) = self.destination(root) {
            paths.push(sidecar_path(&dest));
            paths.push(dest);
        }
        paths
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if !is_plain_component(&self.slug) {
            return Err(CatalogError::InvalidSlug(self.slug.clone()));
        }
        if let Some(sample) = &self.sample {
            if !is_plain_component(&sample.file_name) || sample.file_name == PLACEHOLDER_FILE_NAME
            {
                return Err(CatalogError::InvalidFileName {
                    slug: self.slug.clone(),
                    name: sample.file_name.clone(),
                });
            }
            if sample.urls.is_empty() {
                return Err(CatalogError::EmptySample(self.slug.clone()));
            }
            for u in &sample.urls {
                let ok = url::Url::parse(u)
                    .map(|p| p.scheme() == "http" || p.scheme() == "https")
                    .unwrap_or(false);
                if !ok {
                    return Err(CatalogError::InvalidUrl {
                        slug: self.slug.clone(),
                        url: u.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// A single path component: non-empty, no separators, not `.` or `..`.
fn is_plain_component(s: &str) -> bool {
    !s.is_empty()
        && s != "."
        && s != ".."
        && !s.chars().any(|c| c == '/' || c == '\\' || c == '\0' || c.is_control())
}

/// Validated, ordered list of catalog entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Validates every entry and checks that no two entries write the same path.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            entry.validate()?;
            for path in entry.owned_paths() {
                if !seen.insert(path.clone()) {
                    return Err(CatalogError::DuplicateDestination(
                        path.display().to_string(),
                    ));
                }
            }
        }
        Ok(Self { entries })
    }

    /// The built-in provider catalog with the Worldview snapshot taken on `worldview_date`.
    pub fn builtin(worldview_date: &str) -> Result<Self, CatalogError> {
        Self::new(builtin_entries(worldview_date)?)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    /// Subset of entries named by `slugs`, kept in catalog order.
    pub fn select<S: AsRef<str>>(&self, slugs: &[S]) -> Result<Self, CatalogError> {
        for s in slugs {
            if self.get(s.as_ref()).is_none() {
                return Err(CatalogError::UnknownSlug(s.as_ref().to_string()));
            }
        }
        let entries = self
            .entries
            .iter()
            .filter(|e| slugs.iter().any(|s| s.as_ref() == e.slug))
            .cloned()
            .collect();
        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slug: &str, file: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            provider: format!("Provider {slug}"),
            slug: slug.to_string(),
            docs_url: "https://example.org/".to_string(),
            sample: file.map(|f| Sample {
                urls: vec![format!("https://example.org/{f}")],
                file_name: f.to_string(),
                metadata: SampleMetadata::new("Example"),
            }),
            placeholder: "Download it by hand.\n".to_string(),
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let cat = Catalog::builtin("2020-01-01").unwrap();
        assert_eq!(cat.len(), 8);
        let slugs: Vec<_> = cat.entries().iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(
            slugs,
            [
                "worldview",
                "earth_observatory",
                "wri",
                "sedac",
                "worldpop",
                "ghsl",
                "eu_copernicus",
                "eotoolkit"
            ]
        );
    }

    #[test]
    fn destination_and_placeholder_paths() {
        let e = entry("wri", Some("wri_sample.csv"));
        let root = Path::new("/data");
        assert_eq!(
            e.destination(root),
            Some(PathBuf::from("/data/wri/wri_sample.csv"))
        );
        assert_eq!(e.placeholder_path(root), PathBuf::from("/data/wri/README.txt"));
        assert_eq!(entry("sedac", None).destination(root), None);
    }

    #[test]
    fn json_sample_does_not_share_path_with_its_sidecar() {
        let e = entry("boundaries", Some("boundaries.json"));
        let owned = e.owned_paths();
        assert_eq!(
            owned,
            [
                PathBuf::from("boundaries/README.txt"),
                PathBuf::from("boundaries/boundaries.json.meta.json"),
                PathBuf::from("boundaries/boundaries.json"),
            ]
        );
        assert!(Catalog::new(vec![e]).is_ok());
    }

    #[test]
    fn duplicate_slug_rejected() {
        let err = Catalog::new(vec![entry("a", Some("x.bin")), entry("a", None)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateDestination(_)));
    }

    #[test]
    fn invalid_slug_and_file_name_rejected() {
        assert_eq!(
            Catalog::new(vec![entry("../up", None)]).unwrap_err(),
            CatalogError::InvalidSlug("../up".to_string())
        );
        assert!(matches!(
            Catalog::new(vec![entry("a", Some("README.txt"))]).unwrap_err(),
            CatalogError::InvalidFileName { .. }
        ));
        assert!(matches!(
            Catalog::new(vec![entry("a", Some("sub/x.bin"))]).unwrap_err(),
            CatalogError::InvalidFileName { .. }
        ));
    }

    #[test]
    fn empty_or_bad_urls_rejected() {
        let mut e = entry("a", Some("x.bin"));
        e.sample.as_mut().unwrap().urls.clear();
        assert_eq!(
            Catalog::new(vec![e.clone()]).unwrap_err(),
            CatalogError::EmptySample("a".to_string())
        );
        e.sample.as_mut().unwrap().urls = vec!["ftp://example.org/x.bin".to_string()];
        assert!(matches!(
            Catalog::new(vec![e]).unwrap_err(),
            CatalogError::InvalidUrl { .. }
        ));
    }

    #[test]
    fn select_keeps_catalog_order() {
        let cat = Catalog::new(vec![entry("a", None), entry("b", None), entry("c", None)]).unwrap();
        let sub = cat.select(&["c", "a"]).unwrap();
        let slugs: Vec<_> = sub.entries().iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "c"]);
        assert_eq!(
            cat.select(&["nope"]).unwrap_err(),
            CatalogError::UnknownSlug("nope".to_string())
        );
    }
}
