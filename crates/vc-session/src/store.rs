//! # Session Store Facade
//!
//! The two-tier store every other component is handed. Written once at
//! sign-in, read by the authorization gate and by every authenticated
//! request.

use crate::ports::{SessionError, SessionTier};
use tracing::{debug, warn};
use vc_types::Principal;

/// Storage key for the access token.
pub const TOKEN_KEY: &str = "auth-token";
/// Storage key for the serialized principal.
pub const USER_KEY: &str = "auth-user";

/// Two-tier session store with read-through migration.
pub struct SessionStore {
    durable: Box<dyn SessionTier>,
    fallback: Box<dyn SessionTier>,
}

impl SessionStore {
    /// Create a store over a durable tier and a legacy fallback tier.
    pub fn new(durable: Box<dyn SessionTier>, fallback: Box<dyn SessionTier>) -> Self {
        Self { durable, fallback }
    }

    /// Persist a full session: token and principal together.
    ///
    /// Overwrites any prior session. Both tiers receive both entries so the
    /// fallback keeps working for older client versions during the
    /// transition.
    pub fn save_session(&self, token: &str, principal: &Principal) -> Result<(), SessionError> {
        let user_json = serde_json::to_string(principal)
            .map_err(|e| SessionError::Malformed(e.to_string()))?;

        self.durable.put(TOKEN_KEY, token)?;
        self.durable.put(USER_KEY, &user_json)?;
        self.fallback.put(TOKEN_KEY, token)?;
        self.fallback.put(USER_KEY, &user_json)?;

        debug!(username = %principal.username, "Session saved");
        Ok(())
    }

    /// Two-tier read: durable first, then fallback with migration.
    ///
    /// Tier I/O failures degrade to "absent" on this path; reads never fail.
    fn read_through(&self, key: &str) -> Option<String> {
        match self.durable.get(key) {
            Ok(Some(value)) => return Some(value),
            Ok(None) => {}
            Err(e) => warn!(key, error = %e, "Durable tier read failed"),
        }

        let value = match self.fallback.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "Fallback tier read failed");
                return None;
            }
        };

        // Found only in the fallback: migrate into the durable tier
        if let Err(e) = self.durable.put(key, &value) {
            warn!(key, error = %e, "Migration into durable tier failed");
        } else {
            debug!(key, "Migrated entry from fallback into durable tier");
        }
        Some(value)
    }

    /// The current access token, if a session is present.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read_through(TOKEN_KEY)
    }

    /// The current principal, if a session is present.
    ///
    /// A stored principal that fails to parse yields the default (empty)
    /// principal rather than an error; the caller still sees a session.
    #[must_use]
    pub fn principal(&self) -> Option<Principal> {
        let raw = self.read_through(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(principal) => Some(principal),
            Err(e) => {
                warn!(error = %e, "Stored principal unparseable, using default");
                Some(Principal::default())
            }
        }
    }

    /// True iff an access token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Remove the session from both tiers. Clearing an absent session is a
    /// no-op success.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.durable.remove(TOKEN_KEY)?;
        self.durable.remove(USER_KEY)?;
        self.fallback.remove(TOKEN_KEY)?;
        self.fallback.remove(USER_KEY)?;
        debug!("Session cleared");
        Ok(())
    }

    /// The `Authorization` header value for the current session.
    ///
    /// With no session this is just `"Bearer"`: the request still goes out
    /// unauthenticated and the server is the authority on access control.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        match self.token() {
            Some(token) => format!("Bearer {token}"),
            None => "Bearer".to_string(),
        }
    }
}
