//! Cache-aware query state shared across pages and guards.
//!
//! DESIGN
//! ======
//! One `RwSignal<QueryState<T>>` per cache key, provided through context via
//! the newtype wrappers below, is the whole cache: every call site reading
//! the same wrapper shares one fetch lifecycle. Mutations are plain async
//! calls in `net::api`; after a create, the caller refetches the matching
//! list query to keep the cache coherent.
//!
//! Each `begin` bumps an epoch and resolutions carry the epoch they started
//! with, so a response from a superseded fetch is dropped instead of
//! clobbering newer data.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use leptos::prelude::*;

use crate::net::types::{Organisation, User};

/// Lifecycle container for one GET-style endpoint.
#[derive(Clone, Debug)]
pub struct QueryState<T> {
    /// Last successfully resolved payload, if any.
    pub data: Option<T>,
    /// A fetch is currently in flight.
    pub loading: bool,
    /// Inline-renderable failure from the most recent fetch.
    pub error: Option<String>,
    /// Bumped on every `begin`; stale resolutions are discarded.
    pub epoch: u64,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None, epoch: 0 }
    }
}

impl<T> QueryState<T> {
    /// Mark a fetch as started and return the epoch its resolution must carry.
    pub fn begin(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.epoch += 1;
        self.epoch
    }

    /// Apply a successful response. Returns `false` (and changes nothing)
    /// when a newer fetch has superseded `epoch`.
    pub fn resolve(&mut self, epoch: u64, data: T) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.data = Some(data);
        self.loading = false;
        self.error = None;
        true
    }

    /// Apply a failed response, keeping any previously cached data.
    /// Returns `false` when a newer fetch has superseded `epoch`.
    pub fn fail(&mut self, epoch: u64, message: impl Into<String>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    /// Whether the most recent fetch failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Whether a mount-time effect should issue the initial fetch.
    ///
    /// True only for a query that has never fired: explicit refetches bypass
    /// this so error states do not auto-retry.
    pub fn needs_initial_fetch(&self) -> bool {
        !self.loading && self.data.is_none() && self.error.is_none()
    }
}

/// Cache key for the admin user list (`GET /users`).
#[derive(Clone, Copy)]
pub struct UsersQuery(pub RwSignal<QueryState<Vec<User>>>);

/// Cache key for the caller's organisation list (`GET /organisations`).
#[derive(Clone, Copy)]
pub struct OrganisationsQuery(pub RwSignal<QueryState<Vec<Organisation>>>);

/// Run a query fetch into `query` unless `enabled` is false.
///
/// Disabled queries must not issue a request; this is what keeps the
/// self-fetch (and anything else gated on auth) from firing while logged
/// out. Calling again while a fetch is in flight supersedes it.
pub fn run_query<T, Fut>(enabled: bool, query: RwSignal<QueryState<T>>, fetch: impl FnOnce() -> Fut + 'static)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    if !enabled {
        return;
    }
    let epoch = query.try_update(QueryState::begin).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match fetch().await {
                Ok(data) => {
                    query.update(|q| {
                        let _ = q.resolve(epoch, data);
                    });
                }
                Err(message) => {
                    log::warn!("query failed: {message}");
                    query.update(|q| {
                        let _ = q.fail(epoch, message);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // SSR renders the loading branch; the browser run does the fetch.
        let _ = (epoch, fetch);
    }
}
