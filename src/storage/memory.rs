//! In-memory document store, used by tests and dry runs.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde_json::Value;

use super::DocumentStore;
use crate::error::Result;

#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything was ever written under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.documents.lock().contains_key(key)
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.documents.lock().get(key).cloned())
    }

    fn save(&self, key: &str, document: &Value) -> Result<()> {
        self.documents
            .lock()
            .insert(key.to_string(), document.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.documents.lock().remove(key);
        Ok(())
    }
}
