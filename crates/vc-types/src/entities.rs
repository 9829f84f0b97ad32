//! # Remote Resource Entities
//!
//! Records mirrored 1:1 from API responses. The client never mutates these
//! except by re-fetching; they are plain data.
//!
//! ## Clusters
//!
//! - **Elections**: `Election`, `Candidate`, `CandidateDetails`
//! - **Audit Log**: `Block`
//! - **Accounts**: `User`, `Voter`, `VoterDetails`

use serde::{Deserialize, Serialize};

/// Voter approval code: rejected.
pub const APPROVAL_REJECTED: i32 = 0;
/// Voter approval code: approved.
pub const APPROVAL_APPROVED: i32 = 1;
/// Voter approval code: pending review.
pub const APPROVAL_PENDING: i32 = 2;

/// An election as returned by the elections endpoints.
///
/// `start_date` and `end_date` are epoch milliseconds, matching the wire
/// format. `candidates` is only populated by the `/with-candidates` views.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Election {
    pub election_id: i64,
    pub name: String,
    pub start_date: i64,
    pub end_date: i64,
    /// `UPCOMING`, `ACTIVE`, `OPENED`, or `CLOSED`; the server owns the
    /// transitions.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
}

impl Election {
    /// Whether this election accepts votes at `now_ms` (epoch milliseconds).
    ///
    /// True iff the status is open and the voting window contains `now_ms`.
    #[must_use]
    pub fn is_open_for_voting(&self, now_ms: i64) -> bool {
        (self.status == "ACTIVE" || self.status == "OPENED")
            && self.start_date <= now_ms
            && self.end_date > now_ms
    }

    /// Human-readable time remaining until `end_date`, e.g. `"2d 3h 14m remaining"`.
    #[must_use]
    pub fn time_remaining(&self, now_ms: i64) -> String {
        let remaining = self.end_date - now_ms;
        if remaining <= 0 {
            return "Election ended".to_string();
        }

        let minutes = remaining / (1000 * 60);
        let days = minutes / (60 * 24);
        let hours = (minutes / 60) % 24;
        let minutes = minutes % 60;

        if days > 0 {
            format!("{days}d {hours}h {minutes}m remaining")
        } else if hours > 0 {
            format!("{hours}h {minutes}m remaining")
        } else {
            format!("{minutes}m remaining")
        }
    }
}

/// A candidate standing in an election.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub candidate_id: i64,
    pub name: String,
    pub election_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ward_id: Option<i64>,
    /// `PENDING`, `APPROVED`, or `REJECTED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_details: Option<CandidateDetails>,
}

/// Extended candidate profile, present on enriched candidate views.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDetails {
    pub candidate_id: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub candidate_image_link: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub manifesto_summary: Option<String>,
    #[serde(default)]
    pub review_notes: Option<String>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<i64>,
}

/// One entry of the blockchain-style audit log.
///
/// The vote payload in `data` is encrypted server-side; this client only
/// displays it or asks the server to decrypt it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub block_height: u64,
    pub hash: String,
    pub previous_hash: String,
    #[serde(default)]
    pub election_id: Option<i64>,
    #[serde(default)]
    pub election_name: Option<String>,
    pub voter_id: String,
    pub data: String,
    pub timestamp: i64,
    pub nonce: u64,
}

/// An account record from the user management endpoints.
///
/// Voter detail fields are flattened into the same record by the API, so
/// they live here as optionals rather than in a nested struct.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub voter_id: String,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    pub role: String,
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub last_login: Option<i64>,
    /// See the `APPROVAL_*` constants.
    #[serde(default)]
    pub approval_status: Option<i32>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub ward_id: Option<i64>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub profile_picture_link: Option<String>,
}

/// A voter record from the voter management endpoints, with the detail
/// record nested as the API returns it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub is_active: bool,
    pub approval_status: i32,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub voter_details: VoterDetails,
}

/// Full voter registration details.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VoterDetails {
    pub voter_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub ward_id: i64,
    #[serde(default)]
    pub dob: i64,
    #[serde(default)]
    pub profile_picture_link: String,
    pub approval_status: i32,
    #[serde(default)]
    pub created_at: i64,
}
