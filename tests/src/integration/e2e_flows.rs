//! # End-to-End Flows
//!
//! The full client wiring: sign in against the stub backend, persist the
//! session, gate a navigation, cast a vote, and notify a sibling view.

#[cfg(test)]
mod tests {
    use crate::support::{memory_store, StubBackend};
    use std::time::Duration;
    use tokio::time::timeout;
    use vc_api::{ApiConfig, VotingApiClient};
    use vc_bus::{ClientEvent, EventFilter, EventPublisher, EventTopic, InMemoryEventBus};
    use vc_gate::{AccessGate, GateDecision, RequiredRole, Route};
    use vc_types::{LoginRequest, VoteRequest};

    #[tokio::test]
    async fn sign_in_persists_session_then_gate_denies_admin_view() {
        let backend = StubBackend::spawn().await;
        let store = memory_store();
        let client =
            VotingApiClient::new(ApiConfig::for_testing(backend.base_url()), store.clone())
                .unwrap();

        // Sign in with valid credentials
        let auth = client
            .sign_in(&LoginRequest {
                username: "alice".to_string(),
                password: "correct-horse".to_string(),
            })
            .await
            .unwrap();

        // Persisting the session is the caller's explicit step
        store
            .save_session(&auth.access_token, &auth.principal())
            .unwrap();
        assert!(store.is_authenticated());

        // Alice has USER only: the admin view bounces her to the dashboard
        let gate = AccessGate::new(store.clone());
        assert_eq!(
            gate.can_enter(RequiredRole::Administrator),
            GateDecision::Deny {
                redirect: Route::Dashboard
            }
        );
        // But the dashboard itself is open to her
        assert!(gate.can_enter(RequiredRole::Authenticated).is_allowed());
    }

    #[tokio::test]
    async fn vote_submission_notifies_an_independent_dashboard() {
        let backend = StubBackend::spawn().await;
        let store = memory_store();
        let client =
            VotingApiClient::new(ApiConfig::for_testing(backend.base_url()), store.clone())
                .unwrap();

        let auth = client
            .sign_in(&LoginRequest {
                username: "alice".to_string(),
                password: "correct-horse".to_string(),
            })
            .await
            .unwrap();
        store
            .save_session(&auth.access_token, &auth.principal())
            .unwrap();

        // An independently mounted dashboard subscribes before the vote
        let bus = InMemoryEventBus::new();
        let mut dashboard = bus.subscribe(EventFilter::topics(vec![EventTopic::Elections]));

        // The voting view casts a vote, then publishes
        client
            .submit_vote(&VoteRequest {
                election_id: 1,
                candidate_id: 2,
            })
            .await
            .unwrap();
        let receivers = bus.publish(ClientEvent::ElectionsChanged).await;
        assert_eq!(receivers, 1);

        // The dashboard receives exactly one notification and reloads
        let event = timeout(Duration::from_millis(100), dashboard.recv())
            .await
            .expect("timeout")
            .expect("event");
        assert_eq!(event, ClientEvent::ElectionsChanged);
        assert_eq!(dashboard.try_recv(), Ok(None));

        let reloaded = client.open_elections().await.unwrap();
        assert_eq!(reloaded.len(), 1);
    }

    #[tokio::test]
    async fn sign_out_clears_session_and_gate_redirects_to_signin() {
        let backend = StubBackend::spawn().await;
        let store = memory_store();
        let client =
            VotingApiClient::new(ApiConfig::for_testing(backend.base_url()), store.clone())
                .unwrap();

        let auth = client
            .sign_in(&LoginRequest {
                username: "alice".to_string(),
                password: "correct-horse".to_string(),
            })
            .await
            .unwrap();
        store
            .save_session(&auth.access_token, &auth.principal())
            .unwrap();

        store.clear().unwrap();

        let gate = AccessGate::new(store);
        assert_eq!(
            gate.can_enter(RequiredRole::Authenticated),
            GateDecision::Deny {
                redirect: Route::SignIn
            }
        );
    }
}
