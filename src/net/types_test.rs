use super::*;

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
}

#[test]
fn user_deserializes_from_api_shape() {
    let raw = r#"{"id":"u1","email":"a@b.com","name":"Alice","role":"admin"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn login_response_deserializes_token() {
    let raw = r#"{"token":"abc123"}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "abc123");
}

#[test]
fn asset_kind_path_segments() {
    assert_eq!(AssetKind::Model.path_segment(), "models");
    assert_eq!(AssetKind::Splat.path_segment(), "splats");
}

#[test]
fn organisation_round_trips() {
    let org = Organisation { id: "org1".to_owned(), name: "Acme".to_owned() };
    let raw = serde_json::to_string(&org).unwrap();
    assert_eq!(serde_json::from_str::<Organisation>(&raw).unwrap(), org);
}
