//! Organisation detail page listing the organisation's models and splats.
//!
//! ARCHITECTURE
//! ============
//! Mounted inside the organisation membership guard, so by the time this
//! renders the caller is either an admin or a member. Asset lists are
//! route-scoped (organisation-id keyed) and reset on param change rather
//! than shared app-wide.

#[cfg(test)]
#[path = "organisation_test.rs"]
mod organisation_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::asset_card::AssetCard;
use crate::components::breadcrumb_bar::BreadcrumbBar;
use crate::components::top_bar::TopBar;
use crate::net::api;
use crate::net::query::{self, OrganisationsQuery, QueryState};
use crate::net::types::{Asset, AssetKind, Organisation};
use crate::state::auth::AuthState;
use crate::state::breadcrumbs::BreadcrumbsState;

/// Display name for the organisation, falling back to its id until the
/// shared list resolves (admins may open organisations outside it).
pub(crate) fn organisation_label(list: Option<&[Organisation]>, organisation_id: &str) -> String {
    list.and_then(|orgs| orgs.iter().find(|o| o.id == organisation_id))
        .map_or_else(|| organisation_id.to_owned(), |o| o.name.clone())
}

/// Organisation page — asset inventory plus navigation into the viewer.
#[component]
pub fn OrganisationPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let organisations = expect_context::<OrganisationsQuery>().0;
    let breadcrumbs = expect_context::<RwSignal<BreadcrumbsState>>();
    let params = use_params_map();

    let models = RwSignal::new(QueryState::<Vec<Asset>>::default());
    let splats = RwSignal::new(QueryState::<Vec<Asset>>::default());
    let last_route_org_id = RwSignal::new(None::<String>);

    let organisation_id = move || params.read().get("organisationid");

    // Reset and refetch route-scoped asset lists when the param changes.
    Effect::new(move || {
        let next_id = organisation_id();
        if last_route_org_id.get_untracked() == next_id {
            return;
        }
        last_route_org_id.set(next_id.clone());
        models.set(QueryState::default());
        splats.set(QueryState::default());

        let Some(org_id) = next_id else {
            return;
        };
        let token = auth.get_untracked().token.clone();
        query::run_query(true, models, {
            let token = token.clone();
            let org_id = org_id.clone();
            move || async move { api::fetch_organisation_assets(token, &org_id, AssetKind::Model).await }
        });
        query::run_query(true, splats, {
            move || async move { api::fetch_organisation_assets(token, &org_id, AssetKind::Splat).await }
        });
    });

    let org_label = move || {
        organisation_id().map_or_else(String::new, |id| {
            organisation_label(organisations.get().data.as_deref(), &id)
        })
    };

    // Rebuild the trail from the route so deep links get full ancestry;
    // re-runs refresh the label once the organisation list resolves.
    Effect::new(move || {
        let Some(id) = organisation_id() else {
            return;
        };
        let label = org_label();
        breadcrumbs.update(|b| {
            b.reset_to("Organisations", "/organisations");
            b.push(label, format!("/organisations/{id}"));
        });
    });

    let asset_section = move |title: &'static str, list: RwSignal<QueryState<Vec<Asset>>>, kind: AssetKind| {
        view! {
            <section class="organisation-page__section">
                <h2>{title}</h2>
                <Show when=move || list.get().is_error()>
                    <p class="organisation-page__error">{move || list.get().error.unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !list.get().loading
                    fallback=move || view! { <p>"Loading..."</p> }
                >
                    <div class="organisation-page__cards">
                        {move || {
                            list.get()
                                .data
                                .unwrap_or_default()
                                .into_iter()
                                .map(|asset| {
                                    view! {
                                        <AssetCard
                                            id=asset.id
                                            name=asset.name
                                            organisation_id=asset.organisation_id
                                            kind=kind
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </section>
        }
    };

    view! {
        <div class="organisation-page">
            <TopBar title="Organisation"/>
            <BreadcrumbBar/>

            <div class="organisation-page__body">
                <h1 class="organisation-page__name">{org_label}</h1>
                {asset_section("Models", models, AssetKind::Model)}
                {asset_section("Splats", splats, AssetKind::Splat)}
            </div>
        </div>
    }
}
