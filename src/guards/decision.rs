//! Pure routing-guard decisions.
//!
//! DESIGN
//! ======
//! Guards are decision functions over current auth/query state, re-evaluated
//! on every reactive change; there is no stored transition state. Keeping
//! them free of any rendering concern makes the whole access-control matrix
//! unit-testable. `guards::routes` translates the verdicts into navigation
//! and outlet rendering.

#[cfg(test)]
#[path = "decision_test.rs"]
mod decision_test;

use crate::net::query::QueryState;
use crate::net::types::Organisation;
use crate::state::auth::AuthState;

/// Default redirect target for unauthenticated access.
pub const LOGIN_PATH: &str = "/login";

/// Default fallback for failed authorization checks.
pub const ORGANISATIONS_PATH: &str = "/organisations";

/// Verdict for one guarded render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the nested route.
    Allow,
    /// Render a loading indicator; required inputs are still resolving.
    Pending,
    /// Navigate away to the carried path.
    Redirect(String),
}

/// Gate for any route requiring a session.
///
/// No token redirects to login. A token with unresolved identity is the
/// transient "authenticated, identity unknown" state and must hold at
/// `Pending` — neither the guarded content nor a redirect.
pub fn decide_authed(auth: &AuthState) -> GuardDecision {
    if !auth.is_authed() {
        return GuardDecision::Redirect(LOGIN_PATH.to_owned());
    }
    if auth.user.is_none() {
        return GuardDecision::Pending;
    }
    GuardDecision::Allow
}

/// Gate for admin-only routes. Anything short of a resolved admin identity
/// redirects to `fallback`, whatever the rest of the auth state says.
pub fn decide_admin(auth: &AuthState, fallback: &str) -> GuardDecision {
    if auth.is_admin() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(fallback.to_owned())
    }
}

/// Gate for organisation-scoped routes. Composes under [`decide_authed`];
/// callers route through the authed guard first.
///
/// Admins bypass the membership check unconditionally. Non-admins wait for
/// the organisation list, then membership is a scan for the route's
/// organisation-id parameter: members pass, everything else (non-member,
/// missing parameter, failed list) lands back on the organisations index.
pub fn decide_organisation(
    auth: &AuthState,
    organisations: &QueryState<Vec<Organisation>>,
    organisation_id: Option<&str>,
) -> GuardDecision {
    if auth.is_admin() {
        return GuardDecision::Allow;
    }
    let Some(organisation_id) = organisation_id else {
        return GuardDecision::Redirect(ORGANISATIONS_PATH.to_owned());
    };
    if let Some(list) = &organisations.data {
        if list.iter().any(|o| o.id == organisation_id) {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(ORGANISATIONS_PATH.to_owned())
        }
    } else if organisations.is_error() {
        GuardDecision::Redirect(ORGANISATIONS_PATH.to_owned())
    } else {
        GuardDecision::Pending
    }
}
