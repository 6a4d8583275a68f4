//! Key-value slot backends
//!
//! A slot is a named location holding one text document. The file backend
//! maps each key to `<dir>/<key>.json`; the memory backend keeps slots in a
//! map and is used for embedding and tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{MonetaError, MonetaResult};

use super::file_io::{read_text, write_text_atomic};
use super::SlotStore;

/// Slots stored as JSON files in one directory
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> MonetaResult<Option<String>> {
        read_text(self.slot_path(key))
    }

    fn write(&self, key: &str, contents: &str) -> MonetaResult<()> {
        write_text_atomic(self.slot_path(key), contents)
    }
}

/// Slots kept in process memory
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySlotStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot pre-filled
    pub fn with_slot(key: &str, contents: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut slots) = store.slots.write() {
            slots.insert(key.to_string(), contents.into());
        }
        store
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> MonetaResult<Option<String>> {
        let slots = self.slots.read().map_err(|e| {
            MonetaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, contents: &str) -> MonetaResult<()> {
        let mut slots = self.slots.write().map_err(|e| {
            MonetaError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        slots.insert(key.to_string(), contents.to_string());
        Ok(())
    }
}
