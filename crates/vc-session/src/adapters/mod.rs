//! # Storage Adapters
//!
//! Implements the [`SessionTier`](crate::ports::SessionTier) port:
//! the durable expiring file tier, the legacy one-file-per-key tier kept
//! for migration, and an in-memory tier for tests and embedding.

mod durable;
mod legacy;
mod memory;

pub use durable::DurableFileTier;
pub use legacy::LegacyFileTier;
pub use memory::MemoryTier;
