//! Viewer routes: per-asset route providers plus the file viewer page.
//!
//! ARCHITECTURE
//! ============
//! `ModelProvider`/`SplatProvider` wrap the viewer subtree and supply a
//! route-scoped `ViewerState` context; `ViewerPage` is the route-level
//! coordinator between URL asset identity and the latest-file fetch. The
//! 3D rendering itself happens in the standalone viewer deployment — this
//! page hands bytes and links off to it.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_params_map;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::components::breadcrumb_bar::BreadcrumbBar;
use crate::components::top_bar::TopBar;
use crate::config;
use crate::net::query::OrganisationsQuery;
use crate::net::types::AssetKind;
use crate::pages::organisation::organisation_label;
use crate::state::auth::AuthState;
use crate::state::breadcrumbs::BreadcrumbsState;
use crate::state::viewer::ViewerState;
use crate::util::abort::EffectAbort;

/// Route param key carrying the asset id for this family.
fn asset_param_key(kind: AssetKind) -> &'static str {
    match kind {
        AssetKind::Model => "modelid",
        AssetKind::Splat => "splatid",
    }
}

/// Download file name for an asset's latest file.
#[cfg(any(test, feature = "hydrate"))]
fn latest_file_name(kind: AssetKind, asset_id: &str) -> String {
    match kind {
        AssetKind::Model => format!("{asset_id}.glb"),
        AssetKind::Splat => format!("{asset_id}.splat"),
    }
}

/// External viewer-UI path for an asset.
fn viewer_ui_path(kind: AssetKind, asset_id: &str) -> String {
    format!("/view/{}/{asset_id}", kind.path_segment())
}

/// Human-readable size for the file chip.
fn format_file_size(len: usize) -> String {
    if len >= 1024 * 1024 {
        format!("{:.1} MB", len as f64 / (1024.0 * 1024.0))
    } else if len >= 1024 {
        format!("{:.1} KB", len as f64 / 1024.0)
    } else {
        format!("{len} B")
    }
}

fn provide_viewer_context(kind: AssetKind) {
    let viewer = RwSignal::new(ViewerState::for_kind(kind));
    provide_context(viewer);
}

/// Route provider for `/organisations/:organisationid/models/:modelid`.
#[component]
pub fn ModelProvider() -> impl IntoView {
    provide_viewer_context(AssetKind::Model);
    view! { <Outlet/> }
}

/// Route provider for `/organisations/:organisationid/splats/:splatid`.
#[component]
pub fn SplatProvider() -> impl IntoView {
    provide_viewer_context(AssetKind::Splat);
    view! { <Outlet/> }
}

/// Viewer page — fetches the asset's latest file and offers download and
/// open-in-viewer actions.
#[component]
pub fn ViewerPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let breadcrumbs = expect_context::<RwSignal<BreadcrumbsState>>();
    let params = use_params_map();

    let kind = viewer.with_untracked(|v| v.kind);
    let abort = StoredValue::new_local(EffectAbort::new());
    on_cleanup(move || {
        abort.update_value(EffectAbort::abort);
    });

    let route_asset_id = move || params.read().get(asset_param_key(kind));

    // Refetch when the route param changes; the previous transfer is aborted
    // and its late completions are dropped by the file query's epoch.
    let last_route_asset_id = RwSignal::new(None::<String>);
    Effect::new(move || {
        let next_id = route_asset_id();
        if last_route_asset_id.get_untracked() == next_id {
            return;
        }
        last_route_asset_id.set(next_id.clone());
        viewer.update(|v| v.reset_for_route_change(next_id.clone()));

        let Some(asset_id) = next_id else {
            return;
        };
        let token = auth.get_untracked().token.clone();
        let epoch = viewer.try_update(|v| v.file.begin()).unwrap_or_default();
        let scope = abort.try_update_value(EffectAbort::renew).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_latest_file(token, kind, &asset_id, scope).await {
                Ok(bytes) => {
                    viewer.update(|v| {
                        let _ = v.file.resolve(epoch, bytes);
                    });
                }
                Err(message) => {
                    log::warn!("latest-file fetch failed: {message}");
                    viewer.update(|v| {
                        let _ = v.file.fail(epoch, message);
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, asset_id, epoch, scope);
        }
    });

    // Rebuild the full trail so deep links carry their ancestry.
    let organisations = expect_context::<OrganisationsQuery>().0;
    Effect::new(move || {
        let Some(asset_id) = route_asset_id() else {
            return;
        };
        let Some(org_id) = params.read().get("organisationid") else {
            return;
        };
        let org_label = organisation_label(organisations.get().data.as_deref(), &org_id);
        let label = format!("{} {asset_id}", kind.label());
        let link = format!("/organisations/{org_id}/{}/{asset_id}", kind.path_segment());
        breadcrumbs.update(|b| {
            b.reset_to("Organisations", "/organisations");
            b.push(org_label, format!("/organisations/{org_id}"));
            b.push(label, link);
        });
    });

    let on_download = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let state = viewer.get_untracked();
            let Some(bytes) = state.file.data else {
                return;
            };
            let Some(asset_id) = state.asset_id else {
                return;
            };
            if let Err(e) = trigger_download(&bytes, &latest_file_name(kind, &asset_id)) {
                log::warn!("download failed: {e:?}");
            }
        }
    };

    let viewer_href = move || {
        route_asset_id().map(|id| config::viewer_ui(&viewer_ui_path(kind, &id)))
    };

    view! {
        <div class="viewer-page">
            <TopBar title=kind.label()/>
            <BreadcrumbBar/>

            <div class="viewer-page__body">
                <Show when=move || viewer.get().file.is_error()>
                    <p class="viewer-page__error">
                        {move || viewer.get().file.error.unwrap_or_default()}
                    </p>
                </Show>

                <Show
                    when=move || !viewer.get().file.loading
                    fallback=move || view! { <p>"Loading latest file..."</p> }
                >
                    <Show when=move || viewer.get().file.data.is_some()>
                        <div class="viewer-page__file">
                            <span class="viewer-page__file-size">
                                {move || {
                                    viewer
                                        .get()
                                        .file
                                        .data
                                        .map(|bytes| format_file_size(bytes.len()))
                                        .unwrap_or_default()
                                }}
                            </span>
                            <button class="btn viewer-page__download" on:click=on_download>
                                "Download"
                            </button>
                            <a
                                class="btn viewer-page__open"
                                href=move || viewer_href().unwrap_or_default()
                                target="_blank"
                                rel="noreferrer"
                            >
                                "Open in viewer"
                            </a>
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}

/// Hand the fetched bytes to the browser as a file download.
#[cfg(feature = "hydrate")]
fn trigger_download(bytes: &[u8], file_name: &str) -> Result<(), wasm_bindgen::JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
