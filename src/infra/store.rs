//! JSON key-value storage backend.
//!
//! Models the browser-local store of the original design: a handful of
//! well-known keys, each holding one JSON-encoded value. Process-local,
//! unsynchronized beyond interior mutability; safe only under a single
//! active reader/writer. Concurrent writers are last-write-wins, an
//! accepted limitation of the design.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::errors::AppResult;

/// Raw key-value storage primitive. Values are JSON strings; typed access
/// goes through [`read_json`] / [`write_json`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait StorageBackend: Send + Sync {
    /// Read the raw value under a key, `None` when the key is absent
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Write the raw value under a key, creating or replacing it
    fn write(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Read and decode the value under a key
pub fn read_json<T: DeserializeOwned>(
    store: &dyn StorageBackend,
    key: &str,
) -> AppResult<Option<T>> {
    match store.read(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and write a value under a key
pub fn write_json<T: Serialize>(store: &dyn StorageBackend, key: &str, value: &T) -> AppResult<()> {
    store.write(key, &serde_json::to_string(value)?)
}

/// File-backed store: one `<key>.json` file per key under a data directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for JsonFileStore {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.lock().expect("store lock").get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries
            .lock()
            .expect("store lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.lock().expect("store lock").remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_json() {
        let store = MemoryStore::new();
        write_json(&store, "numbers", &vec![1, 2, 3]).unwrap();
        let values: Option<Vec<i32>> = read_json(&store, "numbers").unwrap();
        assert_eq!(values, Some(vec![1, 2, 3]));

        store.remove("numbers").unwrap();
        let values: Option<Vec<i32>> = read_json(&store, "numbers").unwrap();
        assert!(values.is_none());
    }

    #[test]
    fn file_store_reads_absent_key_as_none() {
        let dir = std::env::temp_dir().join(format!("constructpro-test-{}", uuid::Uuid::new_v4()));
        let store = JsonFileStore::open(&dir).unwrap();
        assert!(store.read("missing").unwrap().is_none());

        store.write("greeting", "\"hello\"").unwrap();
        assert_eq!(store.read("greeting").unwrap().as_deref(), Some("\"hello\""));

        // removing twice is fine
        store.remove("greeting").unwrap();
        store.remove("greeting").unwrap();
        std::fs::remove_dir_all(&dir).ok();
    }
}
