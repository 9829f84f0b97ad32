//! `/votes` endpoints.

use crate::client::VotingApiClient;
use crate::error::ApiError;
use vc_types::{VoteRequest, VoteStatus};

impl VotingApiClient {
    /// `POST /votes/submit` - cast a vote. Encryption and block creation
    /// happen server-side; the response shape varies, so it is returned as
    /// raw JSON for the caller to display.
    pub async fn submit_vote(&self, request: &VoteRequest) -> Result<serde_json::Value, ApiError> {
        self.post_json("/votes/submit", request).await
    }

    /// `GET /votes/status/{voterId}/{electionId}` - whether a voter already
    /// voted in an election, with the audit block reference if so.
    pub async fn vote_status(
        &self,
        voter_id: &str,
        election_id: i64,
    ) -> Result<VoteStatus, ApiError> {
        self.get_json(&format!("/votes/status/{voter_id}/{election_id}"))
            .await
    }
}
