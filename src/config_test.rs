use super::*;

#[test]
fn join_url_inserts_single_slash() {
    assert_eq!(join_url("http://api.local", "users"), "http://api.local/users");
    assert_eq!(join_url("http://api.local", "/users"), "http://api.local/users");
}

#[test]
fn join_url_strips_trailing_base_slash() {
    assert_eq!(join_url("http://api.local/", "/users"), "http://api.local/users");
}

#[test]
fn base_urls_have_no_trailing_slash_after_join() {
    assert!(!platform_api("/auth/login").contains("//auth"));
    assert!(!viewer_api("/models/m1/latest-file").contains("//models"));
    assert!(!viewer_ui("/view").contains("//view"));
}
