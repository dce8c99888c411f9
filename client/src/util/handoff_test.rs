use std::time::Duration;

use futures::executor::block_on;

use super::*;
use crate::net::transport::{Reply, TransportError};
use crate::test_support::{InstantTimer, RecordingHistory, ScriptedTransport, me_body, signed_out_body};
use crate::util::credentials::MemoryCredentials;

type TestSession = SessionService<ScriptedTransport, MemoryCredentials>;

fn session_ok(email: &str, sub: &str) -> Reply {
    Reply::new(200, format!(r#"{{"status":"ok","user":{}}}"#, me_body(email, sub)))
}

fn run(session: &TestSession, history: &RecordingHistory, timer: &InstantTimer) -> (HandoffOutcome, Vec<HandoffState>) {
    let mut seen = Vec::new();
    let outcome = block_on(run_handoff(session, history, timer, &VerifyPolicy::default(), |s| {
        seen.push(s.clone());
    }));
    (outcome, seen)
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn extract_token_finds_value_among_params() {
    assert_eq!(extract_token("?token=abc123"), Some("abc123".to_owned()));
    assert_eq!(extract_token("?user_id=4&token=a%2Bb"), Some("a%2Bb".to_owned()));
    assert_eq!(extract_token("token=x"), Some("x".to_owned()));
}

#[test]
fn extract_token_absent_or_bare_key() {
    assert_eq!(extract_token(""), None);
    assert_eq!(extract_token("?"), None);
    assert_eq!(extract_token("?tokens=abc"), None);
    assert_eq!(extract_token("?token"), Some(String::new()));
}

#[test]
fn percent_decode_handles_escapes() {
    assert_eq!(percent_decode("a%2Bb%3D%3D"), "a+b==");
    assert_eq!(percent_decode("plain.jwt.value"), "plain.jwt.value");
    assert_eq!(percent_decode(""), "");
}

#[test]
fn percent_decode_keeps_invalid_utf8_input() {
    assert_eq!(percent_decode("%FF%FE"), "%FF%FE");
}

#[test]
fn error_codes_round_trip_and_have_distinct_messages() {
    let all = [HandoffError::NoToken, HandoffError::AuthFailed, HandoffError::NetworkError];
    for kind in all {
        assert_eq!(HandoffError::from_code(kind.code()), Some(kind));
    }
    assert_ne!(all[0].message(), all[1].message());
    assert_ne!(all[1].message(), all[2].message());
    assert_eq!(HandoffError::NoToken.home_href(), "/?error=no_token");
    assert_eq!(error_message("bogus"), "Sign-in failed. Please try again.");
}

#[test]
fn verify_policy_backs_off_and_caps() {
    let policy = VerifyPolicy {
        initial_delay: Duration::from_millis(500),
        max_delay: Duration::from_secs(3),
        max_attempts: 6,
    };
    assert_eq!(policy.delay_for(0), Duration::from_millis(500));
    assert_eq!(policy.delay_for(1), Duration::from_millis(1000));
    assert_eq!(policy.delay_for(2), Duration::from_millis(2000));
    assert_eq!(policy.delay_for(3), Duration::from_secs(3));
    assert_eq!(policy.delay_for(40), Duration::from_secs(3));
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn successful_handoff_strips_token_and_redirects_to_dashboard() {
    let session = SessionService::new(
        ScriptedTransport::default()
            .session_reply(Ok(session_ok("a@b.com", "s1")))
            .me_reply(Ok(Reply::new(200, me_body("a@b.com", "s1")))),
        MemoryCredentials::new(true, None),
    );
    let history = RecordingHistory::at("?token=abc123");
    let timer = InstantTimer::default();

    let (outcome, seen) = run(&session, &history, &timer);

    assert_eq!(outcome, HandoffOutcome::Redirect("/dashboard".to_owned()));
    assert_eq!(outcome.href(), "/dashboard");
    assert_eq!(*history.replaced.borrow(), vec!["/auth-callback".to_owned()]);
    assert!(!history.query().contains("token"));
    assert_eq!(*session.transport().session_calls.borrow(), vec!["abc123".to_owned()]);
    assert_eq!(session.credentials().fallback_token(), None);
    assert_eq!(*timer.waits.borrow(), vec![Duration::from_millis(500)]);
    assert_eq!(
        seen,
        vec![
            HandoffState::Init,
            HandoffState::TokenCheck,
            HandoffState::Decoding,
            HandoffState::Exchanging,
            HandoffState::Verifying { attempt: 1 },
            HandoffState::Redirecting,
        ]
    );
}

#[test]
fn missing_token_goes_home_with_no_token() {
    let session = SessionService::new(ScriptedTransport::default(), MemoryCredentials::default());
    let history = RecordingHistory::at("");
    let (outcome, seen) = run(&session, &history, &InstantTimer::default());

    assert_eq!(outcome.href(), "/?error=no_token");
    assert_eq!(seen.last(), Some(&HandoffState::NoToken));
    assert!(session.transport().session_calls.borrow().is_empty());
}

#[test]
fn empty_token_is_treated_as_missing() {
    let session = SessionService::new(ScriptedTransport::default(), MemoryCredentials::default());
    let history = RecordingHistory::at("?token=");
    let (outcome, seen) = run(&session, &history, &InstantTimer::default());

    assert_eq!(outcome, HandoffOutcome::Home(HandoffError::NoToken));
    assert!(seen.contains(&HandoffState::Decoding));
    assert!(session.transport().session_calls.borrow().is_empty());
}

#[test]
fn rejected_exchange_goes_home_with_auth_failed() {
    let session = SessionService::new(
        ScriptedTransport::default().session_reply(Ok(Reply::new(401, r#"{"detail":"Invalid token"}"#))),
        MemoryCredentials::default(),
    );
    let history = RecordingHistory::at("?token=abc123");
    let (outcome, seen) = run(&session, &history, &InstantTimer::default());

    assert_eq!(outcome.href(), "/?error=auth_failed");
    assert_eq!(seen.last(), Some(&HandoffState::Failed(HandoffError::AuthFailed)));
    assert_eq!(session.credentials().fallback_token(), None);
    assert!(session.transport().me_bearers().is_empty());
}

#[test]
fn transport_failure_goes_home_with_network_error() {
    let session = SessionService::new(
        ScriptedTransport::default().session_reply(Err(TransportError::Network("offline".to_owned()))),
        MemoryCredentials::default(),
    );
    let history = RecordingHistory::at("?token=abc123");
    let (outcome, _) = run(&session, &history, &InstantTimer::default());

    assert_eq!(outcome.href(), "/?error=network_error");
}

#[test]
fn success_status_without_authenticated_payload_is_auth_failed() {
    let session = SessionService::new(
        ScriptedTransport::default()
            .session_reply(Ok(Reply::new(200, format!(r#"{{"status":"ok","user":{}}}"#, signed_out_body())))),
        MemoryCredentials::default(),
    );
    let history = RecordingHistory::at("?token=abc123");
    let (outcome, _) = run(&session, &history, &InstantTimer::default());

    assert_eq!(outcome, HandoffOutcome::Home(HandoffError::AuthFailed));
    assert!(history.replaced.borrow().is_empty());
}

#[test]
fn unreadable_exchange_reply_is_auth_failed() {
    let session = SessionService::new(
        ScriptedTransport::default().session_reply(Ok(Reply::new(200, "not json"))),
        MemoryCredentials::default(),
    );
    let history = RecordingHistory::at("?token=abc123");
    let (outcome, _) = run(&session, &history, &InstantTimer::default());

    assert_eq!(outcome, HandoffOutcome::Home(HandoffError::AuthFailed));
}

#[test]
fn encoded_token_is_decoded_before_exchange() {
    let session = SessionService::new(
        ScriptedTransport::default()
            .session_reply(Ok(session_ok("a@b.com", "s1")))
            .me_reply(Ok(Reply::new(200, me_body("a@b.com", "s1")))),
        MemoryCredentials::new(true, None),
    );
    let history = RecordingHistory::at("?token=eyJ.a%2Fb.c%3D&user_id=3");
    let (outcome, _) = run(&session, &history, &InstantTimer::default());

    assert_eq!(outcome.href(), "/dashboard");
    assert_eq!(*session.transport().session_calls.borrow(), vec!["eyJ.a/b.c=".to_owned()]);
}

// =============================================================
// Verification
// =============================================================

#[test]
fn verification_polls_until_cookie_is_visible() {
    let session = SessionService::new(
        ScriptedTransport::default()
            .session_reply(Ok(session_ok("a@b.com", "s1")))
            .me_reply(Ok(Reply::new(200, signed_out_body())))
            .me_reply(Ok(Reply::new(200, signed_out_body())))
            .me_reply(Ok(Reply::new(200, me_body("a@b.com", "s1")))),
        MemoryCredentials::new(true, None),
    );
    let history = RecordingHistory::at("?token=abc123");
    let timer = InstantTimer::default();
    let (outcome, seen) = run(&session, &history, &timer);

    assert_eq!(outcome.href(), "/dashboard");
    assert_eq!(
        *timer.waits.borrow(),
        vec![Duration::from_millis(500), Duration::from_millis(1000), Duration::from_millis(2000)]
    );
    assert!(seen.contains(&HandoffState::Verifying { attempt: 3 }));
}

#[test]
fn verification_uses_issued_bearer_when_cookie_is_not_yet_sent() {
    let reply = format!(r#"{{"status":"ok","user":{},"access_token":"bearer-xyz"}}"#, me_body("a@b.com", "s1"));
    let session = SessionService::new(
        ScriptedTransport::default()
            .session_reply(Ok(Reply::new(200, reply)))
            .me_reply(Ok(Reply::new(401, "")))
            .me_reply(Ok(Reply::new(200, me_body("a@b.com", "s1")))),
        MemoryCredentials::new(false, None),
    );
    let history = RecordingHistory::at("?token=abc123");
    let (outcome, _) = run(&session, &history, &InstantTimer::default());

    assert_eq!(outcome.href(), "/dashboard");
    assert_eq!(session.transport().me_bearers(), vec![None, Some("bearer-xyz".to_owned())]);
    assert_eq!(session.credentials().fallback_token().as_deref(), Some("bearer-xyz"));
}

#[test]
fn handoff_token_is_never_stored_or_sent_as_bearer() {
    let session = SessionService::new(
        ScriptedTransport::default()
            .session_reply(Ok(session_ok("a@b.com", "s1")))
            .me_reply(Ok(Reply::new(401, "")))
            .me_reply(Ok(Reply::new(200, me_body("a@b.com", "s1")))),
        MemoryCredentials::new(false, None),
    );
    let history = RecordingHistory::at("?token=abc123");
    let (outcome, _) = run(&session, &history, &InstantTimer::default());

    assert_eq!(outcome.href(), "/dashboard");
    assert_eq!(session.credentials().fallback_token(), None);
    assert!(session.transport().me_bearers().iter().all(Option::is_none));
}

#[test]
fn verification_gives_up_with_network_error() {
    let policy = VerifyPolicy { max_attempts: 2, ..VerifyPolicy::default() };
    let session = SessionService::new(
        ScriptedTransport::default()
            .session_reply(Ok(session_ok("a@b.com", "s1")))
            .me_reply(Ok(Reply::new(200, signed_out_body())))
            .me_reply(Ok(Reply::new(200, signed_out_body()))),
        MemoryCredentials::new(true, None),
    );
    let history = RecordingHistory::at("?token=abc123");
    let timer = InstantTimer::default();
    let outcome = block_on(run_handoff(&session, &history, &timer, &policy, |_| {}));

    assert_eq!(outcome, HandoffOutcome::Home(HandoffError::NetworkError));
    assert_eq!(timer.waits.borrow().len(), 2);
    assert!(!history.query().contains("token"));
}

#[test]
fn verification_for_another_user_is_auth_failed() {
    let session = SessionService::new(
        ScriptedTransport::default()
            .session_reply(Ok(session_ok("a@b.com", "s1")))
            .me_reply(Ok(Reply::new(200, me_body("other@b.com", "s2")))),
        MemoryCredentials::new(true, None),
    );
    let history = RecordingHistory::at("?token=abc123");
    let (outcome, _) = run(&session, &history, &InstantTimer::default());

    assert_eq!(outcome, HandoffOutcome::Home(HandoffError::AuthFailed));
}

#[test]
fn replaying_after_success_finds_no_token() {
    let session = SessionService::new(
        ScriptedTransport::default()
            .session_reply(Ok(session_ok("a@b.com", "s1")))
            .me_reply(Ok(Reply::new(200, me_body("a@b.com", "s1")))),
        MemoryCredentials::new(true, None),
    );
    let history = RecordingHistory::at("?token=abc123");
    let timer = InstantTimer::default();
    let (first, _) = run(&session, &history, &timer);
    let (second, _) = run(&session, &history, &timer);

    assert_eq!(first.href(), "/dashboard");
    assert_eq!(second, HandoffOutcome::Home(HandoffError::NoToken));
    assert_eq!(session.transport().session_calls.borrow().len(), 1);
}

#[test]
fn handoff_state_labels_cover_terminal_states() {
    assert_eq!(HandoffState::NoToken.label(), HandoffState::Failed(HandoffError::AuthFailed).label());
    assert_ne!(HandoffState::Exchanging.label(), HandoffState::Redirecting.label());
}
