//! # VC API - Remote Data Access Layer
//!
//! Typed request/response operations against the voting backend's REST API.
//! Each method performs exactly one HTTP exchange and maps the result to a
//! typed success value or an [`ApiError`]; the layer never retries, never
//! caches, never falls back.
//!
//! Every request carries the `Authorization` header composed by the session
//! store. With no session the request is still sent unauthenticated; the
//! server is the authority on access control and rejects it with a 401.
//!
//! ## Module Structure
//!
//! ```text
//! vc-api/
//! ├── client.rs        # VotingApiClient core + request helpers
//! ├── auth.rs          # /auth endpoints
//! ├── elections.rs     # /elections endpoints
//! ├── candidates.rs    # /candidates endpoints
//! ├── votes.rs         # /votes endpoints
//! ├── blocks.rs        # /blocks endpoints (audit log)
//! ├── accounts.rs      # /users and /voters endpoints
//! ├── error.rs         # ApiError taxonomy
//! └── config.rs        # ApiConfig
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod accounts;
mod auth;
mod blocks;
mod candidates;
pub mod client;
pub mod config;
mod elections;
pub mod error;
mod votes;

pub use client::VotingApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
