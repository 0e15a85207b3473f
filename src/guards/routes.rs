//! Guard components wrapping the pure decisions from `guards::decision`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each guard sits in the route tree as a parent view: it re-evaluates its
//! decision from context on every relevant state change, navigates on
//! `Redirect`, shows a loading indicator on `Pending`, and renders the
//! nested outlet on `Allow`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading::LoadingIndicator;
use crate::guards::decision::{self, GuardDecision};
use crate::net::api;
use crate::net::query::{self, OrganisationsQuery};
use crate::state::auth::AuthState;

/// Navigate whenever the decision lands on `Redirect`.
fn install_redirect(decision: Memo<GuardDecision>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decision.get() {
            #[cfg(feature = "hydrate")]
            log::debug!("guard redirect -> {path}");
            navigate(&path, NavigateOptions::default());
        }
    });
}

/// What a guard renders while it is not (or not yet) allowing the outlet.
#[component]
fn GuardFallback(decision: Memo<GuardDecision>) -> impl IntoView {
    view! {
        <div class="guard-fallback">
            <Show
                when=move || decision.get() == GuardDecision::Pending
                fallback=|| view! { <p>"Redirecting..."</p> }
            >
                <LoadingIndicator/>
            </Show>
        </div>
    }
}

/// Session gate: unauthenticated visitors go to the login page, a session
/// with unresolved identity holds at loading, everyone else gets the
/// nested route.
#[component]
pub fn AuthedProtectedRoute() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| decision::decide_authed(&auth.get()));
    install_redirect(decision);

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=move || view! { <GuardFallback decision/> }
        >
            <Outlet/>
        </Show>
    }
}

/// Admin gate: non-admins bounce to `fallback` (default: the organisations
/// index), whatever the rest of their session looks like.
#[component]
pub fn AdminProtectedRoute(#[prop(optional, into)] fallback: Option<String>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let fallback = fallback.unwrap_or_else(|| decision::ORGANISATIONS_PATH.to_owned());
    let decision = Memo::new(move |_| decision::decide_admin(&auth.get(), &fallback));
    install_redirect(decision);

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=move || view! { <GuardFallback decision/> }
        >
            <Outlet/>
        </Show>
    }
}

/// Organisation-membership gate for `/organisations/:organisationid/...`.
///
/// Owns the initial fire of the shared organisation-list query, since the
/// membership decision cannot be made without it.
#[component]
pub fn OrganisationProtectedRoute() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let organisations = expect_context::<OrganisationsQuery>().0;
    let params = use_params_map();

    Effect::new(move || {
        let state = auth.get();
        if !state.is_authed() {
            return;
        }
        if organisations.get().needs_initial_fetch() {
            let token = state.token.clone();
            query::run_query(true, organisations, move || api::fetch_organisations(token));
        }
    });

    let decision = Memo::new(move |_| {
        let organisation_id = params.read().get("organisationid");
        decision::decide_organisation(&auth.get(), &organisations.get(), organisation_id.as_deref())
    });
    install_redirect(decision);

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=move || view! { <GuardFallback decision/> }
        >
            <Outlet/>
        </Show>
    }
}
