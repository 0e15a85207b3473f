use super::*;

#[test]
fn login_endpoint_targets_platform_api() {
    assert!(login_endpoint().ends_with("/auth/login"));
}

#[test]
fn self_endpoint_targets_users_me() {
    assert!(self_endpoint().ends_with("/users/me"));
}

#[test]
fn users_endpoint_formats_expected_path() {
    assert!(users_endpoint().ends_with("/users"));
}

#[test]
fn organisations_endpoint_formats_expected_path() {
    assert!(organisations_endpoint().ends_with("/organisations"));
}

#[test]
fn organisation_assets_endpoint_switches_on_kind() {
    assert!(organisation_assets_endpoint("org1", AssetKind::Model).ends_with("/organisations/org1/models"));
    assert!(organisation_assets_endpoint("org1", AssetKind::Splat).ends_with("/organisations/org1/splats"));
}

#[test]
fn latest_file_endpoint_targets_viewer_api() {
    let url = latest_file_endpoint(AssetKind::Model, "m1");
    assert!(url.starts_with(crate::config::VIEWER_API_URL));
    assert!(url.ends_with("/models/m1/latest-file"));

    let url = latest_file_endpoint(AssetKind::Splat, "s1");
    assert!(url.ends_with("/splats/s1/latest-file"));
}

#[test]
fn bearer_header_value_formats_scheme() {
    assert_eq!(bearer_header_value("abc123"), "Bearer abc123");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("users fetch", 500), "users fetch failed: 500");
}

#[test]
fn login_failed_message_maps_401_to_credentials() {
    assert_eq!(login_failed_message(401), "invalid email or password");
    assert_eq!(login_failed_message(503), "login failed: 503");
}
