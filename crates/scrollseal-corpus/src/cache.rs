use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FetchError;

/// Directory-backed cache of raw upstream responses.
///
/// Keys are relative paths (`tanzil/quran-uthmani.txt`,
/// `sefaria/Genesis_1:1-6:8.json`); each key maps to one file under the cache
/// root. A hit returns the bytes exactly as fetched, so re-running the tool
/// against a warm cache is fully offline and deterministic.
#[derive(Debug, Clone)]
pub struct Cache {
    root: PathBuf,
}

impl Cache {
    /// Creates a cache rooted at `dir`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, FetchError> {
        let root = dir.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the cached bytes for `key`, or `None` on a miss.
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>, FetchError> {
        let path = self.root.join(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read(path)?))
    }

    /// Stores `data` under `key`, creating parent directories as needed.
    pub fn put(&self, key: &str, data: &[u8]) -> Result<(), FetchError> {
        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}
