//! Reusable card component for model/splat list items.
//!
//! DESIGN
//! ======
//! Keeps asset list presentation consistent between organisation screens
//! while centralizing the viewer-route navigation affordance.

use leptos::prelude::*;

use crate::net::types::AssetKind;

/// A clickable card linking to an asset's viewer route.
#[component]
pub fn AssetCard(id: String, name: String, organisation_id: String, kind: AssetKind) -> impl IntoView {
    let href = format!("/organisations/{organisation_id}/{}/{id}", kind.path_segment());

    view! {
        <a class="asset-card" href=href>
            <span class="asset-card__name">{name}</span>
            <span class="asset-card__kind">{kind.label()}</span>
        </a>
    }
}
