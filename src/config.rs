//! Runtime settings.
//!
//! Defaults cover everything; with the `config` feature enabled the settings
//! can be overridden from `<config_dir>/autocatalog/config.toml`.

use crate::error::{CatalogError, Result};
use crate::favorites::store::default_path;
use crate::query::DEFAULT_SIMILAR_LIMIT;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// How many import problems are shown at once.
pub const DEFAULT_ERROR_DISPLAY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where favorites are persisted; `None` means the platform data directory
    pub favorites_path: Option<PathBuf>,
    pub error_display_limit: usize,
    pub similar_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            favorites_path: None,
            error_display_limit: DEFAULT_ERROR_DISPLAY_LIMIT,
            similar_limit: DEFAULT_SIMILAR_LIMIT,
        }
    }
}

impl Config {
    /// Favorites file to use, falling back to the platform data directory.
    pub fn resolve_favorites_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.favorites_path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|base| default_path(&base))
            .ok_or_else(|| CatalogError::config("no data directory available on this platform"))
    }

    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        parse_toml(raw)
    }

    /// Load from the user configuration directory. A missing file yields
    /// defaults.
    pub fn load() -> Result<Self> {
        match dirs::config_dir() {
            Some(base) => Self::load_from(&base.join(env!("CARGO_PKG_NAME")).join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(CatalogError::file_error(
                    format!("Cannot read config {}", path.display()),
                    e,
                ))
            }
        };
        log::debug!("loading config from {}", path.display());
        Self::from_toml_str(&raw)
    }
}

#[cfg(feature = "config")]
fn parse_toml(raw: &str) -> Result<Config> {
    toml::from_str(raw).map_err(|e| CatalogError::config(e.to_string()))
}

#[cfg(not(feature = "config"))]
fn parse_toml(raw: &str) -> Result<Config> {
    if raw.trim().is_empty() {
        Ok(Config::default())
    } else {
        Err(CatalogError::config(
            "config file support requires the `config` feature",
        ))
    }
}
