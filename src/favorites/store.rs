//! Persistence primitives for the favorites list.
//!
//! The list is stored as a single JSON array of key strings under a fixed
//! named slot. Stores only move that blob around; membership logic lives in
//! [`Favorites`](crate::favorites::Favorites).

use crate::error::{CatalogError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Name of the slot the favorites list is persisted under.
pub const FAVORITES_SLOT: &str = "auto_catalog_favs";

/// Load/save primitives for the ordered favorites list.
pub trait FavoritesStore {
    /// Read the stored keys. A store that has never been written returns an
    /// empty list.
    fn load(&self) -> Result<Vec<String>>;

    /// Replace the stored keys with `keys`.
    fn save(&self, keys: &[String]) -> Result<()>;
}

/// JSON file backed store, one file per slot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Favorites file under a given base directory:
/// `<base>/autocatalog/<slot>.json`.
pub fn default_path(base: &Path) -> PathBuf {
    base.join(env!("CARGO_PKG_NAME"))
        .join(format!("{}.json", FAVORITES_SLOT))
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> Result<Vec<String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(CatalogError::file_error(
                    format!("Cannot read favorites from {}", self.path.display()),
                    e,
                ))
            }
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, keys: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CatalogError::file_error(
                    format!("Cannot create favorites directory {}", parent.display()),
                    e,
                )
            })?;
        }
        let blob = serde_json::to_string(keys)
            .map_err(|e| CatalogError::store(format!("Cannot serialize favorites: {}", e)))?;
        fs::write(&self.path, blob).map_err(|e| {
            CatalogError::file_error(
                format!("Cannot write favorites to {}", self.path.display()),
                e,
            )
        })
    }
}

/// In-memory store holding the serialized blob.
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw blob, which need not be valid JSON.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(blob.into()))),
        }
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.lock().ok().and_then(|guard| guard.clone())
    }
}

impl FavoritesStore for MemoryStore {
    fn load(&self) -> Result<Vec<String>> {
        let guard = self
            .blob
            .lock()
            .map_err(|_| CatalogError::store("memory store lock poisoned"))?;
        match guard.as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, keys: &[String]) -> Result<()> {
        let blob = serde_json::to_string(keys)
            .map_err(|e| CatalogError::store(format!("Cannot serialize favorites: {}", e)))?;
        let mut guard = self
            .blob
            .lock()
            .map_err(|_| CatalogError::store("memory store lock poisoned"))?;
        *guard = Some(blob);
        Ok(())
    }
}
