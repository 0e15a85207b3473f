//! Authenticated page header: identity chip, admin shortcut, logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};

/// Toolbar rendered across authed pages.
#[component]
pub fn TopBar(#[prop(into)] title: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let self_identity = move || {
        auth.get()
            .user
            .map(|user| (user.name, user.role.label().to_owned()))
            .unwrap_or_else(|| ("me".to_owned(), "user".to_owned()))
    };

    let navigate_users = navigate.clone();
    let on_users = Callback::new(move |()| {
        navigate_users("/users", NavigateOptions::default());
    });

    let navigate_login = navigate.clone();
    let on_logout = Callback::new(move |()| {
        auth::logout(auth);
        navigate_login("/login", NavigateOptions::default());
    });

    view! {
        <header class="top-bar toolbar">
            <span class="toolbar__title">{title}</span>
            <span class="toolbar__divider" aria-hidden="true"></span>

            <span class="toolbar__spacer"></span>

            <Show when=move || auth.get().is_admin()>
                <button class="btn toolbar__users" on:click=move |_| on_users.run(()) title="Manage users">
                    "Users"
                </button>
            </Show>

            <span class="toolbar__self">
                {move || self_identity().0}
                " ("
                <span class="toolbar__self-role">{move || self_identity().1}</span>
                ")"
            </span>

            <button class="btn toolbar__logout" on:click=move |_| on_logout.run(()) title="Logout">
                "Logout"
            </button>
        </header>
    }
}
