//! # VC Gate - Authorization Gate
//!
//! A pure, synchronous admission check evaluated before a protected view is
//! entered. Consults the injected session store and yields a decision; the
//! caller performs the navigation. Every denial is terminal for that
//! navigation attempt.
//!
//! The check is local: no network, no retries. The server still enforces
//! authorization on every request; this gate only decides what to render.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::sync::Arc;
use tracing::debug;
use vc_session::SessionStore;

/// Views the gate can redirect to or protect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Sign-in form (`/signin`).
    SignIn,
    /// Sign-up form (`/signup`).
    SignUp,
    /// Voter dashboard (`/dashboard`).
    Dashboard,
    /// Admin dashboard (`/admin`).
    Admin,
    /// Voting flow (`/vote`).
    Vote,
    /// Voter registration form (`/voter-registration`).
    VoterRegistration,
    /// Candidate nomination form (`/candidate-nomination`).
    CandidateNomination,
}

impl Route {
    /// The path this route is served under.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::SignIn => "/signin",
            Self::SignUp => "/signup",
            Self::Dashboard => "/dashboard",
            Self::Admin => "/admin",
            Self::Vote => "/vote",
            Self::VoterRegistration => "/voter-registration",
            Self::CandidateNomination => "/candidate-nomination",
        }
    }
}

/// The privilege level a view requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRole {
    /// Any valid session.
    Authenticated,
    /// A session whose roles include an admin role.
    Administrator,
}

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Entry permitted.
    Allow,
    /// Entry denied; the caller should navigate to `redirect`.
    Deny {
        /// Where to send the caller instead.
        redirect: Route,
    },
}

impl GateDecision {
    /// True iff entry was permitted.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Admission check over an injected session store.
pub struct AccessGate {
    store: Arc<SessionStore>,
}

impl AccessGate {
    /// Create a gate reading from `store`.
    #[must_use]
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// Decide whether the caller may enter a view requiring `required`.
    ///
    /// 1. No session → deny, redirect to sign-in.
    /// 2. Administrator required but the role set has no admin role →
    ///    deny, redirect to the dashboard.
    /// 3. Otherwise → allow.
    #[must_use]
    pub fn can_enter(&self, required: RequiredRole) -> GateDecision {
        let token = self.store.token();
        let principal = self.store.principal();

        let (Some(_token), Some(principal)) = (token, principal) else {
            debug!("Gate: no session, redirecting to signin");
            return GateDecision::Deny {
                redirect: Route::SignIn,
            };
        };

        if required == RequiredRole::Administrator && !principal.is_admin() {
            debug!(
                username = %principal.username,
                roles = ?principal.roles,
                "Gate: caller is not admin, redirecting to dashboard"
            );
            return GateDecision::Deny {
                redirect: Route::Dashboard,
            };
        }

        debug!(username = %principal.username, "Gate: access granted");
        GateDecision::Allow
    }
}
