use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::storage::FileStore;

/// Isolated data directory backed by a temp dir.
pub struct DataDirFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl DataDirFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();
        println!("[FIXTURE] Created temp directory: {:?}", data_path);
        Self {
            temp_dir,
            data_path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.data_path
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.data_path.clone())
    }

    /// Write a raw document file, bypassing the store.
    pub fn write_document(&self, key: &str, content: &str) -> PathBuf {
        let path = self.data_path.join(format!("{key}.json"));
        std::fs::write(&path, content).expect("Failed to write document");
        path
    }

    pub fn read_document(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.data_path.join(format!("{key}.json"))).ok()
    }
}

impl Default for DataDirFixture {
    fn default() -> Self {
        Self::new()
    }
}
