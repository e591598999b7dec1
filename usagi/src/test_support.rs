//! Test-only helpers for building lists and reading captured output.

use std::path::{Path, PathBuf};

use crate::core::store::ItemStore;

/// Create a list holding `items` in order.
pub fn store_with(items: &[&str]) -> ItemStore {
    let mut store = ItemStore::new();
    for item in items {
        store.add(item).expect("add item");
    }
    store
}

/// Decode bytes captured from a session or dispatch call.
pub fn output_of(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("utf-8 output")
}

/// Scratch directory for list files, removed on drop.
pub struct TestDir {
    temp: tempfile::TempDir,
}

impl TestDir {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write `contents` to `name` inside the directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.temp.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn read_file(&self, name: &str) -> std::io::Result<String> {
        std::fs::read_to_string(self.temp.path().join(name))
    }
}
