//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and navigation affordances while reading
//! shared state from Leptos context providers.

pub mod asset_card;
pub mod breadcrumb_bar;
pub mod loading;
pub mod top_bar;
