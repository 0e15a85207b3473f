//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns one plain state struct; `app` wraps them in `RwSignal`
//! context providers so pages, components, and guards read and mutate the
//! same instances.

pub mod auth;
pub mod breadcrumbs;
pub mod viewer;
