use super::*;

#[test]
fn cookie_has_marker_matches_exact_name() {
    assert!(cookie_has_marker("jwt_session=abc", "jwt_session"));
    assert!(cookie_has_marker("theme=dark; jwt_session=abc; other=1", "jwt_session"));
    assert!(cookie_has_marker("theme=dark;jwt_session=", "jwt_session"));
}

#[test]
fn cookie_has_marker_rejects_prefixed_or_missing_names() {
    assert!(!cookie_has_marker("", "jwt_session"));
    assert!(!cookie_has_marker("old_jwt_session=abc", "jwt_session"));
    assert!(!cookie_has_marker("theme=jwt_session", "jwt_session"));
    assert!(!cookie_has_marker("jwt_session", "jwt_session"));
}

#[test]
fn memory_credentials_round_trip_token() {
    let store = MemoryCredentials::default();
    assert_eq!(store.fallback_token(), None);
    store.set_fallback_token("xyz");
    assert_eq!(store.fallback_token().as_deref(), Some("xyz"));
    store.clear_fallback_token();
    assert_eq!(store.fallback_token(), None);
}

#[test]
fn memory_credentials_treat_empty_token_as_absent() {
    let store = MemoryCredentials::new(false, Some(""));
    assert_eq!(store.fallback_token(), None);
}

#[test]
fn memory_credentials_cookie_marker_toggles() {
    let store = MemoryCredentials::new(false, None);
    assert!(!store.has_session_cookie_marker());
    store.set_cookie_marker(true);
    assert!(store.has_session_cookie_marker());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_credentials_outside_browser_are_absent() {
    let store = BrowserCredentials;
    store.set_fallback_token("ignored");
    assert!(!store.has_session_cookie_marker());
    assert_eq!(store.fallback_token(), None);
    store.clear_fallback_token();
}
