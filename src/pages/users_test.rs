use super::*;

#[test]
fn validate_new_user_input_trims_both_fields() {
    assert_eq!(
        validate_new_user_input("  new@acme.com  ", "  New Person  "),
        Ok(("new@acme.com".to_owned(), "New Person".to_owned()))
    );
}

#[test]
fn validate_new_user_input_requires_both_fields() {
    assert_eq!(validate_new_user_input("", "Someone"), Err("Enter both email and name."));
    assert_eq!(validate_new_user_input("new@acme.com", "   "), Err("Enter both email and name."));
}

#[test]
fn validate_new_user_input_rejects_malformed_email() {
    assert_eq!(validate_new_user_input("not-an-email", "Someone"), Err("Enter a valid email address."));
}
