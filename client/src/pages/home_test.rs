use super::*;
use crate::util::handoff::HandoffError;

#[test]
fn banner_hidden_without_error_code() {
    assert_eq!(banner_for(None), None);
    assert_eq!(banner_for(Some("")), None);
    assert_eq!(banner_for(Some("  ")), None);
}

#[test]
fn banner_shows_distinct_message_per_known_code() {
    assert_eq!(banner_for(Some("no_token")), Some(HandoffError::NoToken.message()));
    assert_eq!(banner_for(Some("auth_failed")), Some(HandoffError::AuthFailed.message()));
    assert_eq!(banner_for(Some("network_error")), Some(HandoffError::NetworkError.message()));
}

#[test]
fn banner_uses_generic_message_for_unknown_code() {
    let generic = banner_for(Some("weird")).unwrap();
    assert_eq!(generic, error_message("something_else"));
    assert_ne!(generic, HandoffError::AuthFailed.message());
}
