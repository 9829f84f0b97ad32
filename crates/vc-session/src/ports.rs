//! # Storage Port
//!
//! The key-value trait both session tiers implement. Keeping it a trait
//! makes the two-tier read path testable with substituted tiers.

use thiserror::Error;

/// Session storage error types.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Underlying storage I/O failed.
    #[error("Session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record could not be encoded or decoded.
    #[error("Session record malformed: {0}")]
    Malformed(String),
}

/// A single storage tier holding string entries by key.
///
/// All operations are synchronous and local; no tier ever touches the
/// network.
pub trait SessionTier: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Store `value` under `key`, overwriting any prior value.
    fn put(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove the entry under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}
