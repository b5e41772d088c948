//! JSON-file backed document store.
//!
//! Each key maps to `<root>/<key>.json`. Writes land in a temp file in the
//! same directory and are renamed over the target.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use super::DocumentStore;
use crate::error::{Result, XrayError};

/// Document store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl DocumentStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        let document = serde_json::from_str(&raw)?;
        Ok(Some(document))
    }

    fn save(&self, key: &str, document: &Value) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|err| {
            XrayError::Storage(format!("create data dir {}: {err}", self.root.display()))
        })?;

        let path = self.path_for(key);
        let rendered = serde_json::to_string_pretty(document)?;

        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(rendered.as_bytes())?;
        tmp.persist(&path)
            .map_err(|err| XrayError::Storage(format!("write {}: {}", path.display(), err.error)))?;

        debug!(path = %path.display(), bytes = rendered.len(), "document saved");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
