//! # VC Session - Session Store
//!
//! Durable client-side storage of the current access token and principal.
//! The sole source of truth for "is the caller authenticated" and "what
//! roles does the caller have".
//!
//! ## Two-tier read path ("read-through migration")
//!
//! Reads check the durable tier first. On a miss they fall back to the
//! legacy tier and, on a hit there, re-write the value into the durable
//! tier before returning it, so an old session keeps working across the
//! storage migration without forcing re-authentication.
//!
//! ## Invariant
//!
//! Token and principal are saved and cleared together. A session is either
//! fully present or fully absent; no partial session is ever written.
//!
//! ## Module Structure
//!
//! ```text
//! vc-session/
//! ├── ports.rs         # SessionTier trait (key-value storage port)
//! ├── adapters/        # DurableFileTier, LegacyFileTier, MemoryTier
//! ├── store.rs         # SessionStore facade
//! └── config.rs        # SessionConfig
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod config;
pub mod ports;
pub mod store;

// Re-exports
pub use adapters::{DurableFileTier, LegacyFileTier, MemoryTier};
pub use config::SessionConfig;
pub use ports::{SessionError, SessionTier};
pub use store::{SessionStore, TOKEN_KEY, USER_KEY};
