use super::*;

fn trail(state: &BreadcrumbsState) -> Vec<(&str, &str)> {
    state.crumbs.iter().map(|c| (c.label.as_str(), c.link.as_str())).collect()
}

#[test]
fn push_appends_in_order() {
    let mut state = BreadcrumbsState::default();
    state.push("Organisations", "/organisations");
    state.push("Acme", "/organisations/org1");
    assert_eq!(
        trail(&state),
        vec![("Organisations", "/organisations"), ("Acme", "/organisations/org1")]
    );
}

#[test]
fn repushing_tail_link_does_not_duplicate() {
    let mut state = BreadcrumbsState::default();
    state.push("Organisations", "/organisations");
    state.push("Organisations", "/organisations");
    assert_eq!(state.crumbs.len(), 1);
}

#[test]
fn repushing_tail_link_refreshes_label() {
    let mut state = BreadcrumbsState::default();
    state.push("...", "/organisations/org1");
    state.push("Acme", "/organisations/org1");
    assert_eq!(trail(&state), vec![("Acme", "/organisations/org1")]);
}

#[test]
fn truncate_to_keeps_prefix_through_match() {
    let mut state = BreadcrumbsState::default();
    state.push("Organisations", "/organisations");
    state.push("Acme", "/organisations/org1");
    state.push("Turbine", "/organisations/org1/models/m1");
    state.truncate_to("/organisations/org1");
    assert_eq!(
        trail(&state),
        vec![("Organisations", "/organisations"), ("Acme", "/organisations/org1")]
    );
}

#[test]
fn truncate_to_unknown_link_is_a_no_op() {
    let mut state = BreadcrumbsState::default();
    state.push("Organisations", "/organisations");
    state.truncate_to("/users");
    assert_eq!(state.crumbs.len(), 1);
}

#[test]
fn push_after_truncate_extends_from_new_tail() {
    let mut state = BreadcrumbsState::default();
    state.push("Organisations", "/organisations");
    state.push("Acme", "/organisations/org1");
    state.push("Turbine", "/organisations/org1/models/m1");
    state.truncate_to("/organisations");
    state.push("Globex", "/organisations/org2");
    assert_eq!(
        trail(&state),
        vec![("Organisations", "/organisations"), ("Globex", "/organisations/org2")]
    );
}

#[test]
fn reset_to_replaces_whole_trail() {
    let mut state = BreadcrumbsState::default();
    state.push("Organisations", "/organisations");
    state.push("Acme", "/organisations/org1");
    state.reset_to("Users", "/users");
    assert_eq!(trail(&state), vec![("Users", "/users")]);
}
