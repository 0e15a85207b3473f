//! Route guards: pure access decisions plus their routing components.

pub mod decision;
pub mod routes;
