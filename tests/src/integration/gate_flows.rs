//! # Authorization Gate Flows
//!
//! The full admission truth table over a real session store.

#[cfg(test)]
mod tests {
    use crate::support::{memory_store, signed_in_store};
    use vc_gate::{AccessGate, GateDecision, RequiredRole, Route};

    #[test]
    fn absent_session_redirects_to_signin_for_any_view() {
        let gate = AccessGate::new(memory_store());

        for required in [RequiredRole::Authenticated, RequiredRole::Administrator] {
            assert_eq!(
                gate.can_enter(required),
                GateDecision::Deny {
                    redirect: Route::SignIn
                }
            );
        }
    }

    #[test]
    fn disjoint_role_sets_never_enter_admin_views() {
        for roles in [
            &["USER"][..],
            &["ROLE_USER"][..],
            &["VOTER", "USER"][..],
            &[][..],
        ] {
            let gate = AccessGate::new(signed_in_store("tok", roles));
            let decision = gate.can_enter(RequiredRole::Administrator);
            assert_eq!(
                decision,
                GateDecision::Deny {
                    redirect: Route::Dashboard
                },
                "roles {roles:?} must be denied"
            );
        }
    }

    #[test]
    fn admin_role_sets_enter_admin_views() {
        // Exact match, superset, legacy spelling
        for roles in [&["ADMIN"][..], &["ADMIN", "USER"][..], &["ROLE_ADMIN"][..]] {
            let gate = AccessGate::new(signed_in_store("tok", roles));
            assert!(
                gate.can_enter(RequiredRole::Administrator).is_allowed(),
                "roles {roles:?} must be allowed"
            );
        }
    }

    #[test]
    fn any_session_enters_authenticated_views() {
        let gate = AccessGate::new(signed_in_store("tok", &["USER"]));
        assert!(gate.can_enter(RequiredRole::Authenticated).is_allowed());
    }

    #[test]
    fn denial_is_terminal_until_session_changes() {
        let store = memory_store();
        let gate = AccessGate::new(store.clone());

        assert!(!gate.can_enter(RequiredRole::Authenticated).is_allowed());

        // Re-navigation after sign-in re-evaluates and passes
        store
            .save_session(
                "tok",
                &crate::support::principal_with_roles("alice", &["USER"]),
            )
            .unwrap();
        assert!(gate.can_enter(RequiredRole::Authenticated).is_allowed());
    }
}
