use super::*;

#[test]
fn for_kind_starts_with_no_asset_and_idle_file() {
    let state = ViewerState::for_kind(AssetKind::Model);
    assert_eq!(state.kind, AssetKind::Model);
    assert!(state.asset_id.is_none());
    assert!(state.file.needs_initial_fetch());
}

#[test]
fn route_change_resets_file_state() {
    let mut state = ViewerState::for_kind(AssetKind::Splat);
    state.asset_id = Some("s1".to_owned());
    let epoch = state.file.begin();
    assert!(state.file.resolve(epoch, vec![1, 2, 3]));

    state.reset_for_route_change(Some("s2".to_owned()));
    assert_eq!(state.asset_id.as_deref(), Some("s2"));
    assert!(state.file.data.is_none());
    assert!(state.file.needs_initial_fetch());
    assert_eq!(state.kind, AssetKind::Splat);
}
