//! Effect-scoped cancellation for in-flight fetches.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components that refetch on a route-param change hold one `EffectAbort`
//! per effect: each run renews it, aborting whatever the previous run left
//! in flight, and cleanup aborts on unmount. Pairs with the query epoch in
//! `net::query` — abort stops wasted transfer, the epoch drops anything
//! that slips through.

#[cfg(test)]
#[path = "abort_test.rs"]
mod abort_test;

/// One abortable fetch scope. `renew` before each fetch, `abort` on cleanup.
#[derive(Debug, Default)]
pub struct EffectAbort {
    armed: bool,
    #[cfg(feature = "hydrate")]
    controller: Option<web_sys::AbortController>,
}

/// Owned handle for a single fetch, movable into its future. Aborting the
/// originating `EffectAbort` cancels the request carrying this scope.
#[derive(Clone, Debug, Default)]
pub struct FetchScope {
    #[cfg(feature = "hydrate")]
    signal: Option<web_sys::AbortSignal>,
}

impl FetchScope {
    /// Signal to attach to the request, when running in a browser.
    #[cfg(feature = "hydrate")]
    pub fn signal(&self) -> Option<&web_sys::AbortSignal> {
        self.signal.as_ref()
    }
}

impl EffectAbort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a fetch scope is currently armed.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Abort the previous scope (if any) and arm a fresh one, returning the
    /// handle the next fetch should carry.
    pub fn renew(&mut self) -> FetchScope {
        self.abort();
        self.armed = true;
        #[cfg(feature = "hydrate")]
        {
            self.controller = web_sys::AbortController::new().ok();
            FetchScope { signal: self.controller.as_ref().map(web_sys::AbortController::signal) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            FetchScope::default()
        }
    }

    /// Abort the current scope. Aborting an unarmed scope is a no-op.
    pub fn abort(&mut self) {
        self.armed = false;
        #[cfg(feature = "hydrate")]
        {
            if let Some(controller) = self.controller.take() {
                controller.abort();
            }
        }
    }
}

impl Drop for EffectAbort {
    fn drop(&mut self) {
        self.abort();
    }
}
