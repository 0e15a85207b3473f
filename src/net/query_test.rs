use super::*;

#[test]
fn default_query_is_idle() {
    let q = QueryState::<Vec<String>>::default();
    assert!(q.data.is_none());
    assert!(!q.loading);
    assert!(!q.is_error());
    assert!(q.needs_initial_fetch());
}

#[test]
fn begin_sets_loading_and_clears_error() {
    let mut q = QueryState::<u32>::default();
    q.error = Some("boom".to_owned());
    let epoch = q.begin();
    assert_eq!(epoch, 1);
    assert!(q.loading);
    assert!(q.error.is_none());
}

#[test]
fn resolve_populates_data_and_stops_loading() {
    let mut q = QueryState::<u32>::default();
    let epoch = q.begin();
    assert!(q.resolve(epoch, 42));
    assert_eq!(q.data, Some(42));
    assert!(!q.loading);
}

#[test]
fn stale_resolve_is_discarded() {
    let mut q = QueryState::<u32>::default();
    let first = q.begin();
    let second = q.begin();
    assert!(!q.resolve(first, 1));
    assert!(q.data.is_none());
    assert!(q.loading);
    assert!(q.resolve(second, 2));
    assert_eq!(q.data, Some(2));
}

#[test]
fn stale_failure_is_discarded() {
    let mut q = QueryState::<u32>::default();
    let first = q.begin();
    let second = q.begin();
    assert!(!q.fail(first, "old fetch lost"));
    assert!(q.error.is_none());
    assert!(q.resolve(second, 7));
}

#[test]
fn fail_keeps_previously_cached_data() {
    let mut q = QueryState::<u32>::default();
    let epoch = q.begin();
    assert!(q.resolve(epoch, 5));
    let epoch = q.begin();
    assert!(q.fail(epoch, "network down"));
    assert_eq!(q.data, Some(5));
    assert!(q.is_error());
    assert!(!q.loading);
}

#[test]
fn needs_initial_fetch_only_before_first_fire() {
    let mut q = QueryState::<u32>::default();
    assert!(q.needs_initial_fetch());
    let epoch = q.begin();
    assert!(!q.needs_initial_fetch());
    assert!(q.fail(epoch, "boom"));
    // A failed query must not auto-retry from mount effects.
    assert!(!q.needs_initial_fetch());
    let epoch = q.begin();
    assert!(q.resolve(epoch, 1));
    assert!(!q.needs_initial_fetch());
}
