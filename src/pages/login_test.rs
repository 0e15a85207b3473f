use super::*;

#[test]
fn validate_login_input_trims_email_only() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "hunter2"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("user@example.com", ""), Err("Enter both email and password."));
    assert_eq!(validate_login_input("   ", "hunter2"), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("not-an-email", "hunter2"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_preserves_password_whitespace() {
    // Passwords are opaque; trimming them would reject valid credentials.
    assert_eq!(
        validate_login_input("user@example.com", " spaced "),
        Ok(("user@example.com".to_owned(), " spaced ".to_owned()))
    );
}

#[test]
fn post_login_path_is_organisations_index() {
    assert_eq!(POST_LOGIN_PATH, "/organisations");
}
