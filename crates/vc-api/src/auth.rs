//! `/auth` endpoints.

use crate::client::VotingApiClient;
use crate::error::ApiError;
use vc_types::{AuthResponse, LoginRequest, MessageResponse, ResetPasswordRequest, SignupRequest};

impl VotingApiClient {
    /// `POST /auth/signin`.
    ///
    /// Does not touch the session store; persisting the returned token and
    /// principal is the caller's explicit next step, so the token/principal
    /// invariant stays in one place.
    pub async fn sign_in(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/signin", request).await
    }

    /// `POST /auth/signup`.
    pub async fn sign_up(&self, request: &SignupRequest) -> Result<MessageResponse, ApiError> {
        self.post_json("/auth/signup", request).await
    }

    /// `POST /auth/reset-password` (bearer-authenticated).
    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json("/auth/reset-password", request).await
    }
}
