//! Admin user management page: list platform users, create new accounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted inside the admin guard. List cache coherency is manual: a
//! successful create triggers an explicit refetch of the shared user-list
//! query rather than relying on any automatic invalidation.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::breadcrumb_bar::BreadcrumbBar;
use crate::components::top_bar::TopBar;
use crate::net::api;
use crate::net::query::{self, UsersQuery};
#[cfg(feature = "hydrate")]
use crate::net::types::CreateUserRequest;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::breadcrumbs::BreadcrumbsState;

fn validate_new_user_input(email: &str, name: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let name = name.trim();
    if email.is_empty() || name.is_empty() {
        return Err("Enter both email and name.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), name.to_owned()))
}

/// Users page — platform account inventory with a create dialog.
#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let users = expect_context::<UsersQuery>().0;
    let breadcrumbs = expect_context::<RwSignal<BreadcrumbsState>>();

    Effect::new(move || {
        breadcrumbs.update(|b| b.reset_to("Users", "/users"));
    });

    let refetch_users = Callback::new(move |()| {
        let state = auth.get_untracked();
        let token = state.token.clone();
        query::run_query(state.is_authed(), users, move || api::fetch_users(token));
    });

    Effect::new(move || {
        let state = auth.get();
        if !state.is_authed() {
            return;
        }
        if users.get().needs_initial_fetch() {
            refetch_users.run(());
        }
    });

    let show_create = RwSignal::new(false);
    let on_create = move |_| show_create.set(true);
    let on_cancel = Callback::new(move |()| show_create.set(false));
    let on_created = Callback::new(move |()| {
        show_create.set(false);
        // Create does not patch the cache; the list is refetched whole.
        refetch_users.run(());
    });

    view! {
        <div class="users-page">
            <TopBar title="Users"/>
            <BreadcrumbBar/>

            <div class="users-page__body">
                <div class="users-page__actions">
                    <button class="btn users-page__new-user" on:click=on_create>
                        "+ New User"
                    </button>
                    <button class="btn" on:click=move |_| refetch_users.run(())>
                        "Refresh"
                    </button>
                </div>

                <Show when=move || users.get().is_error()>
                    <p class="users-page__error">{move || users.get().error.unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !users.get().loading
                    fallback=move || view! { <p>"Loading users..."</p> }
                >
                    <table class="users-page__table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                users
                                    .get()
                                    .data
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|user| {
                                        view! {
                                            <tr>
                                                <td>{user.name}</td>
                                                <td>{user.email}</td>
                                                <td>{user.role.label()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </div>

            <Show when=move || show_create.get()>
                <CreateUserDialog on_cancel=on_cancel on_created=on_created/>
            </Show>
        </div>
    }
}

/// Modal dialog for creating a platform user.
#[component]
fn CreateUserDialog(on_cancel: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let admin = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let (email_value, name_value) = match validate_new_user_input(&email.get_untracked(), &name.get_untracked()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let role = if admin.get_untracked() { Role::Admin } else { Role::User };
        busy.set(true);
        info.set("Creating user...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let token = auth.get_untracked().token.clone();
            leptos::task::spawn_local(async move {
                let request = CreateUserRequest { email: email_value, name: name_value, role };
                match api::create_user(token, &request).await {
                    Ok(_) => on_created.run(()),
                    Err(e) => {
                        info.set(format!("Create failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, name_value, role, auth);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create User"</h2>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label dialog__label--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || admin.get()
                        on:change=move |ev| admin.set(event_target_checked(&ev))
                    />
                    "Administrator"
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
