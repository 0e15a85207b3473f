//! REST API helpers for the platform and viewer services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so fetch
//! failures surface as inline messages without crashing hydration. Requests
//! attach the bearer token when one is held and omit the header otherwise;
//! authorization is the API's call, not the client's guess.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Asset, AssetKind, CreateUserRequest, Organisation, User};
#[cfg(feature = "hydrate")]
use crate::net::types::{LoginRequest, LoginResponse};
use crate::util::abort::FetchScope;

#[cfg(any(test, feature = "hydrate"))]
use crate::config;

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    config::platform_api("/auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn self_endpoint() -> String {
    config::platform_api("/users/me")
}

#[cfg(any(test, feature = "hydrate"))]
fn users_endpoint() -> String {
    config::platform_api("/users")
}

#[cfg(any(test, feature = "hydrate"))]
fn organisations_endpoint() -> String {
    config::platform_api("/organisations")
}

#[cfg(any(test, feature = "hydrate"))]
fn organisation_assets_endpoint(organisation_id: &str, kind: AssetKind) -> String {
    config::platform_api(&format!("/organisations/{organisation_id}/{}", kind.path_segment()))
}

#[cfg(any(test, feature = "hydrate"))]
fn latest_file_endpoint(kind: AssetKind, asset_id: &str) -> String {
    config::viewer_api(&format!("/{}/{asset_id}/latest-file", kind.path_segment()))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    if status == 401 {
        "invalid email or password".to_owned()
    } else {
        request_failed_message("login", status)
    }
}

/// Attach the bearer header when a token is held.
#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &bearer_header_value(token)),
        None => builder,
    }
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// Returns an error string on transport failure, rejected credentials, or a
/// malformed response body.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(&login_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the authenticated account from `GET /users/me`.
///
/// # Errors
///
/// Returns an error string if the request fails or the token is rejected.
pub async fn fetch_self(token: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&self_endpoint()), Some(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("identity fetch", resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch all platform users from `GET /users` (admin only).
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_users(token: Option<String>) -> Result<Vec<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&users_endpoint()), token.as_deref())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("users fetch", resp.status()));
        }
        resp.json::<Vec<User>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Create a platform user via `POST /users` (admin only).
///
/// The caller is responsible for refetching the user list on success; list
/// cache coherency is manual, not automatic.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn create_user(token: Option<String>, request: &CreateUserRequest) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(&users_endpoint()), token.as_deref())
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("user create", resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err("not available on server".to_owned())
    }
}

/// Fetch the caller's organisation list from `GET /organisations`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_organisations(token: Option<String>) -> Result<Vec<Organisation>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&organisations_endpoint()), token.as_deref())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("organisations fetch", resp.status()));
        }
        resp.json::<Vec<Organisation>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch one organisation's model or splat summaries.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_organisation_assets(
    token: Option<String>,
    organisation_id: &str,
    kind: AssetKind,
) -> Result<Vec<Asset>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = organisation_assets_endpoint(organisation_id, kind);
        let resp = with_auth(gloo_net::http::Request::get(&url), token.as_deref())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("asset list fetch", resp.status()));
        }
        resp.json::<Vec<Asset>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, organisation_id, kind);
        Err("not available on server".to_owned())
    }
}

/// Fetch an asset's latest binary file from the viewer API.
///
/// The request carries `scope` so aborting the originating `EffectAbort`
/// (route change, unmount) cancels the transfer.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status; there is
/// no automatic retry.
pub async fn fetch_latest_file(
    token: Option<String>,
    kind: AssetKind,
    asset_id: &str,
    scope: FetchScope,
) -> Result<Vec<u8>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = latest_file_endpoint(kind, asset_id);
        let resp = with_auth(gloo_net::http::Request::get(&url), token.as_deref())
            .abort_signal(scope.signal())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("file fetch", resp.status()));
        }
        resp.binary().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, kind, asset_id, scope);
        Err("not available on server".to_owned())
    }
}
