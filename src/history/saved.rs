use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::error::Result;
use crate::search::ResultItem;
use crate::storage::{self, DocumentStore, SAVED_SEARCHES_KEY};

/// A named, fully materialized result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub results: Vec<ResultItem>,
    #[serde(default)]
    pub created: String,
}

/// Append-only list of saved searches, addressed by position.
///
/// Positions shift after a deletion, so callers should list again before
/// deleting a second entry.
pub struct SavedSearchStore<'a> {
    store: &'a dyn DocumentStore,
    clock: &'a dyn Clock,
}

impl<'a> SavedSearchStore<'a> {
    pub fn new(store: &'a dyn DocumentStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    pub fn list(&self) -> Vec<SavedSearch> {
        storage::load_entries(self.store, SAVED_SEARCHES_KEY)
    }

    pub fn get(&self, index: usize) -> Option<SavedSearch> {
        self.list().into_iter().nth(index)
    }

    /// Append a saved search. Names need not be unique.
    pub fn save(&self, name: &str, kind: &str, results: Vec<ResultItem>) -> Result<SavedSearch> {
        let saved = SavedSearch {
            name: name.to_string(),
            kind: kind.to_string(),
            results,
            created: self.clock.timestamp(),
        };

        let mut searches = self.list();
        searches.push(saved.clone());
        storage::save_typed(self.store, SAVED_SEARCHES_KEY, &searches)?;

        debug!(name, count = saved.results.len(), "search saved");
        Ok(saved)
    }

    /// Remove the entry at `index`. Out of range is a no-op returning `None`.
    pub fn delete_at(&self, index: usize) -> Result<Option<SavedSearch>> {
        let mut searches = self.list();
        if index >= searches.len() {
            warn!(index, len = searches.len(), "saved search index out of range");
            return Ok(None);
        }

        let removed = searches.remove(index);
        storage::save_typed(self.store, SAVED_SEARCHES_KEY, &searches)?;
        Ok(Some(removed))
    }
}
