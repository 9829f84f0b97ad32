//! # Secure Voting Client Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support/          # Stub backend + store/gate fixtures
//! └── integration/      # Cross-crate flows
//!     ├── session_flows.rs   # persistence, migration, expiry
//!     ├── gate_flows.rs      # admission truth table
//!     ├── bus_flows.rs       # publish/subscribe semantics
//!     ├── api_flows.rs       # REST client against a stub server
//!     └── e2e_flows.rs       # sign-in → gate → vote → notify
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p vc-tests
//! cargo test -p vc-tests integration::gate_flows
//! ```

#![allow(dead_code)]

pub mod support;
