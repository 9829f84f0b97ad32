//! # Remote Data Access Flows
//!
//! The REST client against a live stub backend: success decoding, the
//! error taxonomy, and bearer header attachment.

#[cfg(test)]
mod tests {
    use crate::support::{memory_store, signed_in_store, StubBackend};
    use crate::support::stub_server::{ADMIN_TOKEN, FAULT_TOKEN, USER_TOKEN};
    use vc_api::{ApiConfig, ApiError, VotingApiClient};
    use vc_types::{LoginRequest, SignupRequest, VoteRequest};

    fn client_for(backend: &StubBackend, store: std::sync::Arc<vc_session::SessionStore>) -> VotingApiClient {
        VotingApiClient::new(ApiConfig::for_testing(backend.base_url()), store).unwrap()
    }

    #[tokio::test]
    async fn elections_decode_into_typed_records() {
        let backend = StubBackend::spawn().await;
        let client = client_for(&backend, memory_store());

        let elections = client.elections().await.unwrap();
        assert_eq!(elections.len(), 1);
        assert_eq!(elections[0].election_id, 1);
        assert_eq!(elections[0].status, "ACTIVE");
    }

    #[tokio::test]
    async fn forbidden_surfaces_status_and_server_message_verbatim() {
        let backend = StubBackend::spawn().await;
        // Signed in, but not as admin
        let client = client_for(&backend, signed_in_store(USER_TOKEN, &["USER"]));

        let err = client.users().await.unwrap_err();
        match err {
            ApiError::Rejected { status, message } => {
                assert_eq!(status.as_u16(), 403);
                assert_eq!(
                    message.as_deref(),
                    Some("Access denied: admin role required")
                );
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn admin_token_passes_the_same_endpoint() {
        let backend = StubBackend::spawn().await;
        let client = client_for(&backend, signed_in_store(ADMIN_TOKEN, &["ADMIN"]));

        let users = client.users().await.unwrap();
        assert_eq!(users[0].voter_id, "VOTER-ALICE");
    }

    #[tokio::test]
    async fn bearer_header_is_attached_even_without_a_session() {
        let backend = StubBackend::spawn().await;
        let client = client_for(&backend, memory_store());

        // The request is still sent; the server is the authority
        let _ = client.elections().await.unwrap();
        assert_eq!(backend.last_authorization(), Some("Bearer".to_string()));
    }

    #[tokio::test]
    async fn bearer_header_carries_the_stored_token() {
        let backend = StubBackend::spawn().await;
        let client = client_for(&backend, signed_in_store(USER_TOKEN, &["USER"]));

        let _ = client.elections().await.unwrap();
        assert_eq!(
            backend.last_authorization(),
            Some(format!("Bearer {USER_TOKEN}"))
        );
    }

    #[tokio::test]
    async fn bad_credentials_map_to_unauthorized() {
        let backend = StubBackend::spawn().await;
        let client = client_for(&backend, memory_store());

        let err = client
            .sign_in(&LoginRequest {
                username: "alice".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn duplicate_signup_maps_to_validation_error() {
        let backend = StubBackend::spawn().await;
        let client = client_for(&backend, memory_store());

        let err = client
            .sign_up(&SignupRequest {
                username: "taken".to_string(),
                email: "x@y.z".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
        assert!(err.to_string().contains("already taken"));
    }

    #[tokio::test]
    async fn unknown_endpoint_maps_to_not_found() {
        let backend = StubBackend::spawn().await;
        let client = client_for(&backend, memory_store());

        let err = client.delete_election(999).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn server_fault_maps_to_5xx_with_message() {
        let backend = StubBackend::spawn().await;
        let client = client_for(&backend, signed_in_store(FAULT_TOKEN, &["ADMIN"]));

        let err = client.blocks().await.unwrap_err();
        assert!(err.is_server_fault());
        assert!(err.to_string().contains("Internal tally failure"));
    }

    #[tokio::test]
    async fn unreachable_server_maps_to_unreachable() {
        // Nothing listens on port 1
        let client = VotingApiClient::new(
            ApiConfig::for_testing("http://127.0.0.1:1/api"),
            memory_store(),
        )
        .unwrap();

        let err = client.elections().await.unwrap_err();
        assert!(matches!(err, ApiError::Unreachable(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn plain_text_endpoint_returns_body() {
        let backend = StubBackend::spawn().await;
        let client = client_for(&backend, signed_in_store(ADMIN_TOKEN, &["ADMIN"]));

        let text = client.refresh_election_statuses().await.unwrap();
        assert_eq!(text, "Election statuses updated");
    }

    #[tokio::test]
    async fn vote_submission_and_status_round_trip() {
        let backend = StubBackend::spawn().await;
        let client = client_for(&backend, signed_in_store(USER_TOKEN, &["USER"]));

        let receipt = client
            .submit_vote(&VoteRequest {
                election_id: 1,
                candidate_id: 2,
            })
            .await
            .unwrap();
        assert_eq!(receipt["blockHeight"], 7);

        let status = client.vote_status("VOTER-ALICE", 1).await.unwrap();
        assert!(status.has_voted);
        assert_eq!(status.block_height, Some(7));
    }
}
