//! Breadcrumb trail bar for nested navigation.
//!
//! Clicking a crumb truncates the trail back to it and navigates there;
//! pushing new crumbs is the pages' job.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::breadcrumbs::BreadcrumbsState;

/// Renders the current breadcrumb trail, root first.
#[component]
pub fn BreadcrumbBar() -> impl IntoView {
    let breadcrumbs = expect_context::<RwSignal<BreadcrumbsState>>();
    let navigate = use_navigate();

    let on_crumb = Callback::new(move |link: String| {
        breadcrumbs.update(|b| b.truncate_to(&link));
        navigate(&link, NavigateOptions::default());
    });

    view! {
        <nav class="breadcrumb-bar">
            {move || {
                breadcrumbs
                    .get()
                    .crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(index, crumb)| {
                        let link = crumb.link.clone();
                        view! {
                            <span class="breadcrumb-bar__segment">
                                <Show when=move || { index > 0 }>
                                    <span class="breadcrumb-bar__sep" aria-hidden="true">"/"</span>
                                </Show>
                                <button
                                    class="breadcrumb-bar__crumb"
                                    on:click=move |_| on_crumb.run(link.clone())
                                >
                                    {crumb.label.clone()}
                                </button>
                            </span>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
