//! Optional `config.toml` with per-user defaults.
//!
//! ```toml
//! allow_headers = ["cookie", "referer", "user-agent", "authorization"]
//! include_all_headers = false
//! script_format = "sh"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::curl::{AllowList, HeaderPolicy};
use crate::error::{Error, Result};
use crate::script::ScriptDialect;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Replaces the built-in allow-list when set.
    pub allow_headers: Option<Vec<String>>,
    /// Keep every header, ignoring the allow-list.
    pub include_all_headers: bool,
    /// Script dialect used when `--script-format` is not given.
    pub script_format: Option<ScriptDialect>,
}

impl FileConfig {
    pub fn header_policy(&self) -> HeaderPolicy {
        if self.include_all_headers {
            return HeaderPolicy::All;
        }
        match &self.allow_headers {
            Some(names) => HeaderPolicy::AllowList(AllowList::new(names)),
            None => HeaderPolicy::default(),
        }
    }
}

/// `$XDG_CONFIG_HOME/curl-to-kodi/config.toml`, if it exists.
#[cfg(unix)]
pub fn default_config_path() -> Option<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("curl-to-kodi").ok()?;
    xdg_dirs.find_config_file(CONFIG_FILE_NAME)
}

#[cfg(not(unix))]
pub fn default_config_path() -> Option<PathBuf> {
    None
}

/// Load an explicit config file, or the default one when `path` is `None`.
///
/// A missing default file yields defaults; a missing explicit file is an error.
pub fn load(path: Option<&Path>) -> Result<FileConfig> {
    match path {
        Some(path) => load_from(path),
        None => match default_config_path() {
            Some(path) => load_from(&path),
            None => Ok(FileConfig::default()),
        },
    }
}

pub fn load_from(path: &Path) -> Result<FileConfig> {
    let data = fs::read_to_string(path)?;
    let cfg = toml::from_str(&data).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
