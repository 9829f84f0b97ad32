//! # Principal
//!
//! The authenticated identity persisted by the session store and consulted
//! by the authorization gate.

use serde::{Deserialize, Serialize};

/// Role names that grant administrator access. The backend has emitted both
/// spellings across versions, so the gate accepts either.
pub const ADMIN_ROLES: [&str; 2] = ["ADMIN", "ROLE_ADMIN"];

/// The signed-in identity: who the caller is and which roles they carry.
///
/// Built from a successful sign-in response and stored alongside the access
/// token. The default value (all fields empty) stands in for a principal
/// whose stored form could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Principal {
    /// True iff the role set intersects [`ADMIN_ROLES`].
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.roles
            .iter()
            .any(|r| ADMIN_ROLES.contains(&r.as_str()))
    }

    /// The voter id derived from the username, `VOTER-<USERNAME>`.
    ///
    /// Mirrors the server-side convention so the client can query vote
    /// status without an extra lookup.
    #[must_use]
    pub fn voter_id(&self) -> String {
        format!("VOTER-{}", self.username.to_uppercase())
    }
}
