//! `/candidates` endpoints.

use crate::client::VotingApiClient;
use crate::error::ApiError;
use std::collections::HashMap;
use vc_types::{
    Candidate, CreateCandidateRequest, UpdateCandidateRequest, UpdateCandidateStatusRequest,
};

impl VotingApiClient {
    /// `GET /candidates` - all candidates across all elections.
    pub async fn candidates(&self) -> Result<Vec<Candidate>, ApiError> {
        self.get_json("/candidates").await
    }

    /// `GET /candidates/election/{id}` - all candidates of one election,
    /// including pending and rejected (admin views).
    pub async fn candidates_by_election(
        &self,
        election_id: i64,
    ) -> Result<Vec<Candidate>, ApiError> {
        self.get_json(&format!("/candidates/election/{election_id}"))
            .await
    }

    /// `GET /candidates/election/{id}/approved` - approved candidates only
    /// (voter-facing views; the server does the filtering).
    pub async fn approved_candidates(&self, election_id: i64) -> Result<Vec<Candidate>, ApiError> {
        self.get_json(&format!("/candidates/election/{election_id}/approved"))
            .await
    }

    /// `GET /candidates/election/{id}/vote-counts` - tallied votes keyed by
    /// candidate name, for the admin charts.
    pub async fn candidate_vote_counts(
        &self,
        election_id: i64,
    ) -> Result<HashMap<String, u64>, ApiError> {
        self.get_json(&format!("/candidates/election/{election_id}/vote-counts"))
            .await
    }

    /// `POST /candidates`.
    pub async fn create_candidate(
        &self,
        request: &CreateCandidateRequest,
    ) -> Result<Candidate, ApiError> {
        self.post_json("/candidates", request).await
    }

    /// `PUT /candidates/{id}`.
    pub async fn update_candidate(
        &self,
        candidate_id: i64,
        request: &UpdateCandidateRequest,
    ) -> Result<Candidate, ApiError> {
        self.put_json(&format!("/candidates/{candidate_id}"), request)
            .await
    }

    /// `PUT /candidates/{id}/status` - approve or reject a nomination.
    pub async fn update_candidate_status(
        &self,
        candidate_id: i64,
        request: &UpdateCandidateStatusRequest,
    ) -> Result<Candidate, ApiError> {
        self.put_json(&format!("/candidates/{candidate_id}/status"), request)
            .await
    }

    /// `DELETE /candidates/{id}`.
    pub async fn delete_candidate(&self, candidate_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/candidates/{candidate_id}")).await
    }
}
