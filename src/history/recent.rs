use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::Clock;
use crate::error::Result;
use crate::storage::{self, DocumentStore, HISTORY_KEY};

/// Entries kept in the history document.
pub const MAX_HISTORY: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    /// Mode label, kept as free text so unknown labels still load.
    pub mode: String,
    pub results: usize,
    pub timestamp: String,
}

/// Newest-first list of recent searches, capped at [`MAX_HISTORY`].
pub struct HistoryStore<'a> {
    store: &'a dyn DocumentStore,
    clock: &'a dyn Clock,
    max_entries: usize,
}

impl<'a> HistoryStore<'a> {
    pub fn new(store: &'a dyn DocumentStore, clock: &'a dyn Clock) -> Self {
        Self::with_capacity(store, clock, MAX_HISTORY)
    }

    pub fn with_capacity(store: &'a dyn DocumentStore, clock: &'a dyn Clock, max_entries: usize) -> Self {
        Self {
            store,
            clock,
            max_entries,
        }
    }

    /// Entries newest first. A missing or unreadable document is empty;
    /// individual malformed entries are skipped.
    pub fn list(&self) -> Vec<HistoryEntry> {
        storage::load_entries(self.store, HISTORY_KEY)
    }

    /// Insert at the front and drop whatever falls past the cap.
    pub fn record(&self, query: &str, mode: &str, results: usize) -> Result<HistoryEntry> {
        let entry = HistoryEntry {
            query: query.to_string(),
            mode: mode.to_string(),
            results,
            timestamp: self.clock.timestamp(),
        };

        let mut entries = self.list();
        entries.insert(0, entry.clone());
        entries.truncate(self.max_entries);
        storage::save_typed(self.store, HISTORY_KEY, &entries)?;

        debug!(mode, results, kept = entries.len(), "history recorded");
        Ok(entry)
    }

    /// Remove the history document entirely.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(HISTORY_KEY)
    }
}
