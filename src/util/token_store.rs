//! Durable bearer-token persistence in `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! One storage key holds the token as a plain string. Every mutation writes
//! through to storage before any reactive state updates, so a reload always
//! reflects the latest token. Storage access is hydrate-only; SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "models360_auth_token";

/// Normalize a raw storage read into token presence/absence.
///
/// A historical serialization bug persisted the literal string `"undefined"`;
/// that value must read back as absence. Keep this check even if the write
/// path can no longer produce it — old browsers still carry the value.
pub fn normalize_stored_token(raw: Option<String>) -> Option<String> {
    match raw {
        Some(value) if value == "undefined" => None,
        other => other,
    }
}

/// Read the persisted token, treating the `"undefined"` placeholder as absent.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        normalize_stored_token(storage.get_item(STORAGE_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write `token` through to storage.
pub fn persist(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token. Clearing an already-clear store is a no-op.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
