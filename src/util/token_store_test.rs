use super::*;

#[test]
fn normalize_passes_real_tokens_through() {
    assert_eq!(normalize_stored_token(Some("abc123".to_owned())), Some("abc123".to_owned()));
}

#[test]
fn normalize_treats_undefined_literal_as_absence() {
    assert_eq!(normalize_stored_token(Some("undefined".to_owned())), None);
}

#[test]
fn normalize_keeps_absence() {
    assert_eq!(normalize_stored_token(None), None);
}

#[test]
fn normalize_only_matches_exact_undefined() {
    // "undefined2" or case variants are opaque tokens as far as the client knows.
    assert_eq!(
        normalize_stored_token(Some("undefined2".to_owned())),
        Some("undefined2".to_owned())
    );
    assert_eq!(
        normalize_stored_token(Some("Undefined".to_owned())),
        Some("Undefined".to_owned())
    );
}
