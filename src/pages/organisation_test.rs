use super::*;

fn orgs() -> Vec<Organisation> {
    vec![
        Organisation { id: "org1".to_owned(), name: "Acme".to_owned() },
        Organisation { id: "org2".to_owned(), name: "Globex".to_owned() },
    ]
}

#[test]
fn organisation_label_finds_name_in_list() {
    assert_eq!(organisation_label(Some(&orgs()), "org2"), "Globex");
}

#[test]
fn organisation_label_falls_back_to_id_when_unknown() {
    assert_eq!(organisation_label(Some(&orgs()), "org9"), "org9");
}

#[test]
fn organisation_label_falls_back_to_id_before_list_resolves() {
    assert_eq!(organisation_label(None, "org1"), "org1");
}
