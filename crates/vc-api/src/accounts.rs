//! `/users` and `/voters` endpoints - account administration and the voter
//! approval workflow.

use crate::client::VotingApiClient;
use crate::error::ApiError;
use vc_types::{CreateUserRequest, UpdateUserRequest, UpdateVoterStatusRequest, User, Voter};

impl VotingApiClient {
    /// `GET /users` - all accounts (admin).
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/users").await
    }

    /// `POST /users`.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ApiError> {
        self.post_json("/users", request).await
    }

    /// `PUT /users/{id}`.
    pub async fn update_user(
        &self,
        user_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<User, ApiError> {
        self.put_json(&format!("/users/{user_id}"), request).await
    }

    /// `DELETE /users/{id}`.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/users/{user_id}")).await
    }

    /// `GET /voters/all` - every registered voter (admin).
    pub async fn voters(&self) -> Result<Vec<Voter>, ApiError> {
        self.get_json("/voters/all").await
    }

    /// `GET /voters/pending` - registrations awaiting review.
    pub async fn pending_voters(&self) -> Result<Vec<Voter>, ApiError> {
        self.get_json("/voters/pending").await
    }

    /// `GET /voters/approved`.
    pub async fn approved_voters(&self) -> Result<Vec<Voter>, ApiError> {
        self.get_json("/voters/approved").await
    }

    /// `PUT /voters/{id}/status` - approve or reject a registration.
    pub async fn update_voter_status(
        &self,
        voter_id: &str,
        request: &UpdateVoterStatusRequest,
    ) -> Result<Voter, ApiError> {
        self.put_json(&format!("/voters/{voter_id}/status"), request)
            .await
    }
}
