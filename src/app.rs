//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
    hooks::use_navigate,
};

use crate::guards::routes::{AdminProtectedRoute, AuthedProtectedRoute, OrganisationProtectedRoute};
use crate::net::query::{OrganisationsQuery, QueryState, UsersQuery};
use crate::pages::login::LoginPage;
use crate::pages::organisation::OrganisationPage;
use crate::pages::organisations::OrganisationsPage;
use crate::pages::users::UsersPage;
use crate::pages::viewer::{ModelProvider, SplatProvider, ViewerPage};
use crate::state::auth;
use crate::state::breadcrumbs::BreadcrumbsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides auth, breadcrumb, and query-cache contexts, restores the
/// persisted session, and sets up the guarded route tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One signal per shared state/cache key; all call sites read these.
    let auth = RwSignal::new(auth::restore());
    let breadcrumbs = RwSignal::new(BreadcrumbsState::default());
    let users_query = UsersQuery(RwSignal::new(QueryState::default()));
    let organisations_query = OrganisationsQuery(RwSignal::new(QueryState::default()));

    provide_context(auth);
    provide_context(breadcrumbs);
    provide_context(users_query);
    provide_context(organisations_query);

    auth::install_identity_fetch(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/models360-client.css"/>
        <Title text="360models"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=AuthedProtectedRoute>
                    <Route path=StaticSegment("") view=HomeRedirect/>
                    <Route path=StaticSegment("organisations") view=OrganisationsPage/>
                    <ParentRoute
                        path=(StaticSegment("organisations"), ParamSegment("organisationid"))
                        view=OrganisationProtectedRoute
                    >
                        <Route path=StaticSegment("") view=OrganisationPage/>
                        <ParentRoute
                            path=(StaticSegment("models"), ParamSegment("modelid"))
                            view=ModelProvider
                        >
                            <Route path=StaticSegment("") view=ViewerPage/>
                        </ParentRoute>
                        <ParentRoute
                            path=(StaticSegment("splats"), ParamSegment("splatid"))
                            view=SplatProvider
                        >
                            <Route path=StaticSegment("") view=ViewerPage/>
                        </ParentRoute>
                    </ParentRoute>
                    <ParentRoute path=StaticSegment("users") view=|| view! { <AdminProtectedRoute/> }>
                        <Route path=StaticSegment("") view=UsersPage/>
                    </ParentRoute>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// `/` lands authenticated visitors on the organisations index.
#[component]
fn HomeRedirect() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        navigate("/organisations", NavigateOptions::default());
    });
    view! { <p>"Redirecting..."</p> }
}
