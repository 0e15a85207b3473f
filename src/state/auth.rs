//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read this context to coordinate
//! login redirects and identity-dependent rendering. The state is a pure
//! function of the persisted bearer token plus the outcome of the identity
//! self-fetch; nothing else may mutate `user`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::{Role, User};
use crate::util::token_store;

/// Authentication state tracking the bearer token and resolved identity.
///
/// `is_authed` flips synchronously with the token; `user` trails it by one
/// self-fetch. In between the session is "authenticated, identity unknown"
/// and guards render loading.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub user_loading: bool,
}

impl AuthState {
    /// True iff a bearer token is held. Does not wait for the self-fetch.
    pub fn is_authed(&self) -> bool {
        self.token.is_some()
    }

    /// True iff the loaded identity carries the admin role.
    /// Always false while `user` is unresolved.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    /// Install a new token value. Any previously resolved identity is
    /// dropped; it belonged to the old token.
    pub fn apply_token(&mut self, token: Option<String>) {
        self.token = token;
        self.user = None;
        self.user_loading = false;
    }

    /// Clear the whole session. Calling on a logged-out state is a no-op.
    pub fn apply_logout(&mut self) {
        self.token = None;
        self.user = None;
        self.user_loading = false;
    }

    /// Mark the identity self-fetch as in flight.
    pub fn begin_identity_fetch(&mut self) {
        self.user_loading = true;
    }

    /// Resolve the identity self-fetch. Ignored if the session ended while
    /// the fetch was in flight.
    pub fn apply_identity(&mut self, user: User) {
        if !self.is_authed() {
            return;
        }
        self.user = Some(user);
        self.user_loading = false;
    }
}

/// Initial state for app start: token restored from durable storage,
/// identity not yet fetched.
pub fn restore() -> AuthState {
    AuthState { token: token_store::load(), user: None, user_loading: false }
}

/// Persist `token` and update reactive state. Storage is written first so a
/// reload mid-update still sees the new session.
pub fn set_token(auth: RwSignal<AuthState>, token: &str) {
    token_store::persist(token);
    auth.update(|a| a.apply_token(Some(token.to_owned())));
}

/// Drop the session. Idempotent: logging out twice lands in the same state.
pub fn logout(auth: RwSignal<AuthState>) {
    token_store::clear();
    auth.update(AuthState::apply_logout);
}

/// Whether the identity fetch should fire, given the token a previous fire
/// latched on. At most one fire per token value; logged out never fires.
fn should_fetch_identity(requested_for: Option<&str>, token: Option<&str>) -> bool {
    match token {
        None => false,
        Some(token) => requested_for != Some(token),
    }
}

/// Install the identity self-fetch effect.
///
/// Fires only while a token is held, exactly once per token value; a token
/// change re-arms it. A rejected fetch drops the session — a token the API
/// refuses to identify cannot unlock any guarded route, and keeping it
/// would pin guards in the loading state.
pub fn install_identity_fetch(auth: RwSignal<AuthState>) {
    let requested_for = StoredValue::new(None::<String>);
    Effect::new(move || {
        let state = auth.get();
        let Some(token) = state.token.clone() else {
            requested_for.set_value(None);
            return;
        };
        if !should_fetch_identity(requested_for.get_value().as_deref(), Some(token.as_str())) {
            return;
        }
        requested_for.set_value(Some(token.clone()));
        auth.update(AuthState::begin_identity_fetch);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_self(&token).await {
                Ok(user) => auth.update(|a| a.apply_identity(user)),
                Err(message) => {
                    log::warn!("identity fetch failed, dropping session: {message}");
                    logout(auth);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    });
}
