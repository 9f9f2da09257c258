//! In-memory storage: tests and hosts without a durable store

use std::collections::HashMap;
use std::sync::Mutex;

use super::{Storage, StorageError};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("memory storage lock".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("memory storage lock".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
