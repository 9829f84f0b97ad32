//! Legacy session tier: one plain file per key, no expiry.
//!
//! The old storage mechanism, retained read-mostly so existing sessions
//! migrate into the durable tier instead of being lost.

use crate::ports::{SessionError, SessionTier};
use std::path::{Path, PathBuf};

/// Directory-backed tier where each key maps to a plain file.
pub struct LegacyFileTier {
    dir: PathBuf,
}

impl LegacyFileTier {
    /// Create a tier storing one file per key under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// The backing directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SessionTier for LegacyFileTier {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let path = self.file_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), SessionError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.file_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let path = self.file_for(key);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}
