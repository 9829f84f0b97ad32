//! Durable session tier: one JSON file of expiring entries.
//!
//! The client-side analog of the source platform's 7-day cookie. Each entry
//! records when it stops being valid; expired entries read as absent and
//! are pruned from the file.

use crate::config::SessionConfig;
use crate::ports::{SessionError, SessionTier};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One stored value with its expiry deadline (epoch milliseconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry {
    value: String,
    expires_at_ms: i64,
}

/// File-backed tier with per-entry retention.
pub struct DurableFileTier {
    path: PathBuf,
    config: SessionConfig,
}

impl DurableFileTier {
    /// Create a tier backed by the JSON file at `path`. The file is created
    /// lazily on the first write.
    pub fn new(path: impl Into<PathBuf>, config: SessionConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    fn now_ms() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    fn load(&self) -> Result<HashMap<String, Entry>, SessionError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&raw).map_err(|e| SessionError::Malformed(e.to_string()))
    }

    fn save(&self, entries: &HashMap<String, Entry>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(entries)
            .map_err(|e| SessionError::Malformed(e.to_string()))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionTier for DurableFileTier {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let mut entries = self.load()?;
        let now = Self::now_ms();

        match entries.get(key) {
            Some(entry) if entry.expires_at_ms > now => Ok(Some(entry.value.clone())),
            Some(_) => {
                // Expired: prune and report absent
                debug!(key, "Durable entry expired, pruning");
                entries.remove(key);
                self.save(&entries)?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.load().unwrap_or_default();
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at_ms: Self::now_ms() + self.config.retention_ms(),
            },
        );
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.load().unwrap_or_default();
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
