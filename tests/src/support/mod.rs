//! Shared fixtures: in-memory session stores and a stub voting backend.


pub use stub_server::StubBackend;

use std::sync::Arc;
use vc_session::{MemoryTier, SessionStore};
use vc_types::Principal;

/// A session store over in-memory tiers.
#[must_use]
pub fn memory_store() -> Arc<SessionStore> {
    Arc::new(SessionStore::new(
        Box::new(MemoryTier::new()),
        Box::new(MemoryTier::new()),
    ))
}

/// A principal with the given roles.
#[must_use]
pub fn principal_with_roles(username: &str, roles: &[&str]) -> Principal {
    Principal {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        roles: roles.iter().map(|r| (*r).to_string()).collect(),
    }
}

/// A store already holding a signed-in session.
#[must_use]
pub fn signed_in_store(token: &str, roles: &[&str]) -> Arc<SessionStore> {
    let store = memory_store();
    store
        .save_session(token, &principal_with_roles("alice", roles))
        .expect("save session");
    store
}
