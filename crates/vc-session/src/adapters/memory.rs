//! In-memory session tier for tests and embedded use.

use crate::ports::{SessionError, SessionTier};
use std::collections::HashMap;
use std::sync::RwLock;

/// Map-backed tier with no persistence and no expiry.
#[derive(Default)]
pub struct MemoryTier {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTier {
    /// Create an empty tier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionTier for MemoryTier {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| SessionError::Malformed(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| SessionError::Malformed(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| SessionError::Malformed(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
