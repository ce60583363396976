//! Durable key-value storage for event snapshots.
//!
//! The store only ever reads and overwrites whole values, so a backend just
//! needs `get` and `set` on string keys.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{CalStoreError, CalStoreResult};

pub trait Storage {
    /// Read the value stored under `key`. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> CalStoreResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> CalStoreResult<()>;

    /// Copy the raw value under `from` to `to`. A missing `from` is a no-op.
    fn copy(&mut self, from: &str, to: &str) -> CalStoreResult<()> {
        match self.get(from)? {
            Some(value) => self.set(to, &value),
            None => Ok(()),
        }
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> CalStoreResult<Option<String>> {
        let path = self.path_for(key);

        match std::fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| CalStoreError::LoadDecode(format!("{}: {e}", path.display()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> CalStoreResult<()> {
        let write_err =
            |e: std::io::Error| CalStoreError::StorageWrite(format!("{}: {e}", self.dir.display()));

        std::fs::create_dir_all(&self.dir).map_err(write_err)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        // Readers see either the old snapshot or the new one, never half of it
        std::fs::write(&temp, value).map_err(write_err)?;
        if let Err(e) = std::fs::rename(&temp, &path) {
            let _ = std::fs::remove_file(&temp);
            return Err(write_err(e));
        }
        Ok(())
    }

    /// Byte-for-byte copy, so values that aren't valid UTF-8 survive.
    fn copy(&mut self, from: &str, to: &str) -> CalStoreResult<()> {
        let source = self.path_for(from);
        if !source.exists() {
            return Ok(());
        }

        std::fs::copy(&source, self.path_for(to)).map_err(|e| {
            CalStoreError::StorageWrite(format!("{}: {e}", source.display()))
        })?;
        Ok(())
    }
}

/// In-memory storage. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> CalStoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CalStoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
