//! Storage layer for xray
//!
//! Every persisted concern (quota counter, recent history, saved searches) is
//! one JSON document behind a key. Callers read-modify-write the whole
//! document on every access; there is no cache and no locking.

pub mod file;
pub mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::Result;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key of the daily quota counter document.
pub const QUOTA_KEY: &str = "quota_usage";
/// Key of the recent-activity document.
pub const HISTORY_KEY: &str = "search_history";
/// Key of the saved result sets document.
pub const SAVED_SEARCHES_KEY: &str = "saved_searches";

/// A small key-document store.
pub trait DocumentStore: Send + Sync {
    /// Load the document stored under `key`, `None` if it was never written.
    fn load(&self, key: &str) -> Result<Option<Value>>;

    /// Replace the document stored under `key`.
    fn save(&self, key: &str, document: &Value) -> Result<()>;

    /// Remove the document entirely. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Load and decode a document, degrading to `None` when it is missing,
/// unreadable, or does not match the expected shape.
pub fn load_typed<T: DeserializeOwned>(store: &dyn DocumentStore, key: &str) -> Option<T> {
    let document = match store.load(key) {
        Ok(Some(document)) => document,
        Ok(None) => return None,
        Err(err) => {
            warn!(key, error = %err, "unreadable document, treating as empty");
            return None;
        }
    };

    match serde_json::from_value(document) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, error = %err, "malformed document, treating as empty");
            None
        }
    }
}

/// Load a list document entry by entry.
///
/// Entries that fail to decode are skipped so one bad record never hides
/// the rest. A document that is not an array reads as empty.
pub fn load_entries<T: DeserializeOwned>(store: &dyn DocumentStore, key: &str) -> Vec<T> {
    let entries: Vec<Value> = match load_typed(store, key) {
        Some(entries) => entries,
        None => return Vec::new(),
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(position, entry)| match serde_json::from_value(entry) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, position, error = %err, "skipping malformed entry");
                None
            }
        })
        .collect()
}

/// Encode and store a document.
pub fn save_typed<T: Serialize>(store: &dyn DocumentStore, key: &str, value: &T) -> Result<()> {
    let document = serde_json::to_value(value)?;
    store.save(key, &document)
}
