use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default Worldview snapshot date.
pub const DEFAULT_WORLDVIEW_DATE: &str = "2020-01-01";

/// Global configuration loaded from `~/.config/eosamples/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EosConfig {
    /// Root of the provider directory tree. Relative paths resolve against the working directory.
    pub data_dir: PathBuf,
    /// Connect timeout for each sample GET, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout for each sample GET, in seconds.
    pub timeout_secs: u64,
    /// Samples larger than this are rejected and replaced by a placeholder.
    pub max_sample_bytes: u64,
    /// Write a `<sample>.json` sidecar next to each downloaded sample.
    pub write_metadata: bool,
    /// Date (YYYY-MM-DD) of the Worldview true-color snapshot.
    pub worldview_date: String,
}

impl Default for EosConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            connect_timeout_secs: 15,
            timeout_secs: 60,
            max_sample_bytes: 32 * 1024 * 1024,
            write_metadata: true,
            worldview_date: DEFAULT_WORLDVIEW_DATE.to_string(),
        }
    }
}

impl EosConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("eosamples")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<EosConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but for an explicit path (used by tests and `--config`).
pub fn load_or_init_at(path: &Path) -> Result<EosConfig> {
    if !path.exists() {
        let default_cfg = EosConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: EosConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
