//! Organisations index — the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shares the organisation-list cache with the membership guard: whichever
//! mounts first fires the fetch, the other reads the same signal.

use leptos::prelude::*;

use crate::components::breadcrumb_bar::BreadcrumbBar;
use crate::components::top_bar::TopBar;
use crate::net::api;
use crate::net::query::{self, OrganisationsQuery};
use crate::state::auth::AuthState;
use crate::state::breadcrumbs::BreadcrumbsState;

/// Organisations page — lists every organisation the caller can open.
#[component]
pub fn OrganisationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let organisations = expect_context::<OrganisationsQuery>().0;
    let breadcrumbs = expect_context::<RwSignal<BreadcrumbsState>>();

    Effect::new(move || {
        breadcrumbs.update(|b| b.reset_to("Organisations", "/organisations"));
    });

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

    let on_refresh = move |_| {
        let state = auth.get_untracked();
        let token = state.token.clone();
        query::run_query(state.is_authed(), organisations, move || api::fetch_organisations(token));
    };

    view! {
        <div class="organisations-page">
            <TopBar title="Organisations"/>
            <BreadcrumbBar/>

            <div class="organisations-page__body">
                <div class="organisations-page__actions">
                    <button class="btn" on:click=on_refresh>
                        "Refresh"
                    </button>
                </div>

                <Show when=move || organisations.get().is_error()>
                    <p class="organisations-page__error">
                        {move || organisations.get().error.unwrap_or_default()}
                    </p>
                </Show>

                <Show
                    when=move || !organisations.get().loading
                    fallback=move || view! { <p>"Loading organisations..."</p> }
                >
                    <div class="organisations-page__cards">
                        {move || {
                            organisations
                                .get()
                                .data
                                .unwrap_or_default()
                                .into_iter()
                                .map(|org| {
                                    let href = format!("/organisations/{}", org.id);
                                    view! {
                                        <a class="organisation-card" href=href>
                                            <span class="organisation-card__name">{org.name}</span>
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </div>
        </div>
    }
}
