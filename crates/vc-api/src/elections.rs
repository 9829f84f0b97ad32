//! `/elections` endpoints.

use crate::client::VotingApiClient;
use crate::error::ApiError;
use vc_types::{CreateElectionRequest, Election, UpdateElectionRequest};

impl VotingApiClient {
    /// `GET /elections` - every election, all statuses.
    pub async fn elections(&self) -> Result<Vec<Election>, ApiError> {
        self.get_json("/elections").await
    }

    /// `GET /elections/open` - elections currently accepting votes.
    pub async fn open_elections(&self) -> Result<Vec<Election>, ApiError> {
        self.get_json("/elections/open").await
    }

    /// `GET /elections/eligible` - elections the caller may vote in.
    pub async fn eligible_elections(&self) -> Result<Vec<Election>, ApiError> {
        self.get_json("/elections/eligible").await
    }

    /// `GET /elections/with-candidates` - elections enriched with their
    /// candidate lists.
    pub async fn elections_with_candidates(&self) -> Result<Vec<Election>, ApiError> {
        self.get_json("/elections/with-candidates").await
    }

    /// `POST /elections`.
    pub async fn create_election(
        &self,
        request: &CreateElectionRequest,
    ) -> Result<Election, ApiError> {
        self.post_json("/elections", request).await
    }

    /// `PUT /elections/{id}`.
    pub async fn update_election(
        &self,
        election_id: i64,
        request: &UpdateElectionRequest,
    ) -> Result<Election, ApiError> {
        self.put_json(&format!("/elections/{election_id}"), request)
            .await
    }

    /// `DELETE /elections/{id}`.
    pub async fn delete_election(&self, election_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/elections/{election_id}")).await
    }

    /// `POST /elections/update-statuses` - ask the server to roll election
    /// statuses forward. The one plain-text endpoint.
    pub async fn refresh_election_statuses(&self) -> Result<String, ApiError> {
        self.post_text("/elections/update-statuses", &serde_json::json!({}))
            .await
    }
}
