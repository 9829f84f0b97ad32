//! # Response Payloads
//!
//! Typed bodies for endpoints that do not return a plain entity list.

use crate::Principal;
use serde::{Deserialize, Serialize};

/// `POST /auth/signin` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    /// Always `Bearer` today.
    #[serde(default)]
    pub token_type: String,
    /// The voter id is carried in `username` for API compatibility.
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl AuthResponse {
    /// The principal to persist alongside the access token.
    #[must_use]
    pub fn principal(&self) -> Principal {
        Principal {
            username: self.username.clone(),
            email: self.email.clone(),
            roles: self.roles.clone(),
        }
    }
}

/// Generic `{ message }` acknowledgement used by signup, password reset and
/// several admin endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /votes/status/{voterId}/{electionId}` response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VoteStatus {
    pub has_voted: bool,
    #[serde(default)]
    pub block_height: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub election_name: Option<String>,
}

/// `GET /blocks/{height}/decrypt-vote` response.
///
/// Deliberately lenient: the server has changed this shape between versions,
/// so every field defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DecryptedVote {
    #[serde(default)]
    pub candidate_id: Option<i64>,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub election_id: Option<i64>,
    #[serde(default)]
    pub election_name: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}
