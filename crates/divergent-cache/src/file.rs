//! JSON-file backed key-value store.
//!
//! The whole store is one JSON object on disk, read once when opened and
//! rewritten on every change. Writes go through a temporary file and a rename
//! so a crash never leaves a truncated document behind.
//!
//! A document that does not parse as a string-to-string map is moved aside to
//! `<name>.corrupt` and the store opens empty.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::{CacheError, KeyValueStore};

/// Store persisted as a single JSON document.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, creating parent directories as needed.
    ///
    /// A missing file opens as an empty store; it is created on first write.
    /// A corrupt file is renamed to [`FileStore::corrupt_path`] and the store
    /// opens empty. Only I/O failures are returned as errors.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CacheError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    CacheError::OpenError(format!("{}: {}", parent.display(), e))
                })?;
            }
        }

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| CacheError::OpenError(format!("{}: {}", path.display(), e)))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                match serde_json::from_str(&content) {
                    Ok(entries) => entries,
                    Err(e) => {
                        let aside = Self::corrupt_path(&path);
                        tracing::warn!(
                            path = %path.display(),
                            moved_to = %aside.display(),
                            error = %e,
                            "discarding corrupt store document"
                        );
                        fs::rename(&path, &aside).map_err(|e| {
                            CacheError::OpenError(format!("{}: {}", aside.display(), e))
                        })?;
                        BTreeMap::new()
                    }
                }
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "opened file store");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a corrupt document at `path` is moved to.
    pub fn corrupt_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".corrupt");
        PathBuf::from(name)
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), CacheError> {
        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.entries.read().keys().cloned().collect())
    }
}
