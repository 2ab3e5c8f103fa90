// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Key-value storage backends.
//!
//! Provides:
//! - [`MemoryStore`]: shared in-memory map, cheap to clone
//! - [`FileStore`]: one JSON file per key inside a directory

use dashmap::DashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{LedgerError, Result};

/// A string-keyed store of string values.
///
/// Writes replace the previous value in full. Implementations must never
/// leave a partially written value behind.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: each key is stored as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(LedgerError::Storage(format!("Invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LedgerError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| {
            LedgerError::Storage(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;

        // Write beside the target and rename over it, so readers see the old
        // value or the new one, never a mix.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .map_err(|e| LedgerError::Storage(format!("Failed to write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path).map_err(|e| {
            LedgerError::Storage(format!("Failed to replace {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LedgerError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("workout", "[]").unwrap();

        assert_eq!(other.get("workout").unwrap().as_deref(), Some("[]"));
        other.remove("workout").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryStore::new();
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        assert!(store.get("workout").unwrap().is_none());

        store.set("workout", "[1,2]").unwrap();
        assert_eq!(store.get("workout").unwrap().as_deref(), Some("[1,2]"));
        assert!(!dir.path().join("nested/workout.json.tmp").exists());

        store.remove("workout").unwrap();
        assert!(store.get("workout").unwrap().is_none());
        // Removing again is fine.
        store.remove("workout").unwrap();
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());
    }
}
