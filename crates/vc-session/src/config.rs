//! # Session Configuration

use serde::{Deserialize, Serialize};

/// Default retention window for durable session entries, in days.
pub const DEFAULT_RETENTION_DAYS: i64 = 7;

/// Session store configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How long a durable entry stays valid before it is treated as absent.
    pub retention_days: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }
}

impl SessionConfig {
    /// Create a config for testing (short retention).
    #[must_use]
    pub fn for_testing() -> Self {
        Self { retention_days: 1 }
    }

    /// The retention window in milliseconds.
    #[must_use]
    pub fn retention_ms(&self) -> i64 {
        self.retention_days * 24 * 60 * 60 * 1000
    }
}
