use super::*;

#[test]
fn new_scope_is_unarmed() {
    let scope = EffectAbort::new();
    assert!(!scope.is_armed());
}

#[test]
fn renew_arms_the_scope_and_hands_out_a_handle() {
    let mut scope = EffectAbort::new();
    let _handle: FetchScope = scope.renew();
    assert!(scope.is_armed());
}

#[test]
fn abort_disarms_and_is_idempotent() {
    let mut scope = EffectAbort::new();
    let _handle = scope.renew();
    scope.abort();
    assert!(!scope.is_armed());
    scope.abort();
    assert!(!scope.is_armed());
}

#[test]
fn renew_supersedes_previous_scope() {
    let mut scope = EffectAbort::new();
    let _first = scope.renew();
    let _second = scope.renew();
    assert!(scope.is_armed());
    scope.abort();
    assert!(!scope.is_armed());
}
