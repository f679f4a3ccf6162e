//! Key-value persistence for per-user settings.
//!
//! The host add-on environment normally supplies durable per-user storage;
//! the [`PropertyStore`] trait is the seam so the glue logic runs against
//! any backing. A file-backed store is provided for hosts without one,
//! stored as TOML under the user config directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::error::{ProofError, Result};

const CONFIG_DIR: &str = "sheetproof";
const PROPERTIES_FILE: &str = "properties.toml";

/// Per-user string key-value storage.
///
/// Reads and writes are last-writer-wins; one active user session at a time
/// is assumed.
pub trait PropertyStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn delete(&mut self, key: &str);
}

/// In-memory store, for tests and hosts that bring their own persistence.
#[derive(Debug, Default)]
pub struct MemoryPropertyStore {
    props: BTreeMap<String, String>,
}

impl MemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.props.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.props.insert(key.to_string(), value.to_string());
    }

    fn delete(&mut self, key: &str) {
        self.props.remove(key);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct PropertiesFile {
    properties: BTreeMap<String, String>,
}

/// File-backed store: a TOML table of string properties, loaded leniently
/// (a file that fails to parse starts the store empty) and rewritten on
/// every mutation.
pub struct FilePropertyStore {
    path: PathBuf,
    data: PropertiesFile,
}

impl FilePropertyStore {
    /// Open the store at the default per-user location.
    pub fn open() -> Result<Self> {
        let path = BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(CONFIG_DIR).join(PROPERTIES_FILE))
            .ok_or_else(|| {
                ProofError::Storage("could not determine config directory".to_string())
            })?;
        Ok(Self::at_path(path))
    }

    /// Open the store at an explicit path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = Self::load(&path);
        Self { path, data }
    }

    fn load(path: &Path) -> PropertiesFile {
        if !path.exists() {
            return PropertiesFile::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    PropertiesFile::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                PropertiesFile::default()
            }
        }
    }

    fn save(&self) {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    tracing::warn!("Failed to create {}: {}", parent.display(), e);
                    return;
                }
            }
        }

        let content = match toml::to_string_pretty(&self.data) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to serialize properties: {}", e);
                return;
            }
        };

        if let Err(e) = std::fs::write(&self.path, content) {
            tracing::warn!("Failed to write {}: {}", self.path.display(), e);
        }
    }
}

impl PropertyStore for FilePropertyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.properties.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.data
            .properties
            .insert(key.to_string(), value.to_string());
        self.save();
    }

    fn delete(&mut self, key: &str) {
        self.data.properties.remove(key);
        self.save();
    }
}
