//! Shared loading indicator for guard fallbacks and query branches.

use leptos::prelude::*;

/// Centered loading placeholder.
#[component]
pub fn LoadingIndicator(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading-indicator">
            <p>{label}</p>
        </div>
    }
}
