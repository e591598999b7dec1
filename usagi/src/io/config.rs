//! Session configuration stored in `usagi.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::debug;

/// Default config file name, resolved against the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "usagi.toml";

/// Session configuration (TOML).
///
/// Missing fields default to the interactive behaviour with no preloaded files.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UsagiConfig {
    /// Print the welcome banner when the session starts.
    pub banner: bool,

    /// List files appended to the list before the first prompt, in order.
    pub preload: Vec<PathBuf>,
}

impl Default for UsagiConfig {
    fn default() -> Self {
        Self {
            banner: true,
            preload: Vec::new(),
        }
    }
}

impl UsagiConfig {
    pub fn validate(&self) -> Result<()> {
        if self
            .preload
            .iter()
            .any(|path| path.as_os_str().is_empty())
        {
            return Err(anyhow!("preload entries must be non-empty paths"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `UsagiConfig::default()`.
pub fn load_config(path: &Path) -> Result<UsagiConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        return Ok(UsagiConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UsagiConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    debug!(path = %path.display(), preload = cfg.preload.len(), "config loaded");
    Ok(cfg)
}
