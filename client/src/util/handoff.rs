//! Token handoff: turns the one-time token from the login redirect into a
//! verified browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend finishes the Google flow by redirecting to
//! `/auth-callback?token=...`. The callback page runs [`run_handoff`] once on
//! mount and performs whatever [`HandoffOutcome`] it returns.
//!
//! STATE MACHINE
//! =============
//! `Init -> TokenCheck -> {NoToken | Decoding} -> Exchanging
//!  -> {Verifying -> Redirecting | Failed(kind)}`
//!
//! Steps run strictly in order and nothing is retried automatically; a
//! failed handoff sends the user home with an `error` code and they start
//! over. The token itself is never logged.
//!
//! PROPAGATION
//! ===========
//! The session cookie set by the exchange reply may not be visible to the
//! very next request. Instead of a single fixed sleep the handler polls the
//! identity endpoint with exponential backoff until it reports the user the
//! exchange returned, giving up after [`VerifyPolicy::max_attempts`].
//!
//! The handoff token is never stored. The fallback bearer slot is filled
//! only when the exchange reply carries its own `access_token`.

#[cfg(test)]
#[path = "handoff_test.rs"]
mod handoff_test;

use std::time::Duration;

use leptos::logging::{log, warn};

use crate::config::{CALLBACK_PATH, DASHBOARD_PATH, VERIFY_INITIAL_DELAY, VERIFY_MAX_ATTEMPTS, VERIFY_MAX_DELAY};
use crate::net::session::SessionService;
use crate::net::transport::AuthTransport;
use crate::net::types::SessionResponse;
use crate::state::auth::AuthState;
use crate::util::browser::{History, Timer};
use crate::util::credentials::CredentialStore;

/// Why a handoff sent the user back home. Carried as `/?error=<code>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandoffError {
    NoToken,
    AuthFailed,
    NetworkError,
}

impl HandoffError {
    pub fn code(self) -> &'static str {
        match self {
            Self::NoToken => "no_token",
            Self::AuthFailed => "auth_failed",
            Self::NetworkError => "network_error",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "no_token" => Some(Self::NoToken),
            "auth_failed" => Some(Self::AuthFailed),
            "network_error" => Some(Self::NetworkError),
            _ => None,
        }
    }

    /// Human-readable explanation shown on the home route.
    pub fn message(self) -> &'static str {
        match self {
            Self::NoToken => "The sign-in link was missing its login token. Please sign in again.",
            Self::AuthFailed => "We couldn't complete your sign-in. Please try again.",
            Self::NetworkError => {
                "We couldn't reach the server to finish signing in. Check your connection and try again."
            }
        }
    }

    /// Home route carrying this error code.
    pub fn home_href(self) -> String {
        format!("/?error={}", self.code())
    }
}

/// Message for an arbitrary `error` query value.
pub fn error_message(code: &str) -> &'static str {
    HandoffError::from_code(code).map_or("Sign-in failed. Please try again.", HandoffError::message)
}

/// Observable progress of a single handoff run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandoffState {
    Init,
    TokenCheck,
    NoToken,
    Decoding,
    Exchanging,
    /// 1-based identity check attempt.
    Verifying { attempt: u32 },
    Redirecting,
    Failed(HandoffError),
}

impl HandoffState {
    /// Status line for the callback page.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Init | Self::TokenCheck | Self::Decoding => "Reading your sign-in link...",
            Self::Exchanging => "Creating your session...",
            Self::Verifying { .. } => "Confirming your session...",
            Self::Redirecting => "Opening your dashboard...",
            Self::NoToken | Self::Failed(_) => "Sign-in could not be completed.",
        }
    }
}

/// What the callback page must do when the run ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandoffOutcome {
    /// Full page navigation to the given path.
    Redirect(String),
    /// In-app navigation home with an error code.
    Home(HandoffError),
}

impl HandoffOutcome {
    pub fn href(&self) -> String {
        match self {
            Self::Redirect(path) => path.clone(),
            Self::Home(kind) => kind.home_href(),
        }
    }
}

/// Bounded backoff used while waiting for the session cookie to take effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyPolicy {
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub max_attempts: u32,
}

impl Default for VerifyPolicy {
    fn default() -> Self {
        Self {
            initial_delay: VERIFY_INITIAL_DELAY,
            max_delay: VERIFY_MAX_DELAY,
            max_attempts: VERIFY_MAX_ATTEMPTS,
        }
    }
}

impl VerifyPolicy {
    /// Wait before the 0-based `attempt`: doubles each time, capped.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1_u32 << attempt.min(16);
        self.initial_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Raw (still percent-encoded) `token` value from a query string.
pub fn extract_token(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == "token")
        .map(|(_, value)| value.to_owned())
}

/// Percent-decode a token. Malformed input is returned unchanged.
pub fn percent_decode(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned)
}

/// Run the handoff against the current URL. `on_state` sees every
/// transition, terminal states included.
pub async fn run_handoff<T, C, H, S, F>(
    session: &SessionService<T, C>,
    history: &H,
    timer: &S,
    policy: &VerifyPolicy,
    mut on_state: F,
) -> HandoffOutcome
where
    T: AuthTransport,
    C: CredentialStore,
    H: History,
    S: Timer,
    F: FnMut(&HandoffState),
{
    on_state(&HandoffState::Init);
    on_state(&HandoffState::TokenCheck);
    let Some(raw) = extract_token(&history.query()) else {
        warn!("auth callback reached without a token");
        on_state(&HandoffState::NoToken);
        return HandoffOutcome::Home(HandoffError::NoToken);
    };

    on_state(&HandoffState::Decoding);
    let token = percent_decode(&raw);
    if token.is_empty() {
        warn!("auth callback token was empty");
        on_state(&HandoffState::NoToken);
        return HandoffOutcome::Home(HandoffError::NoToken);
    }
    log!("auth callback token received ({} chars)", token.len());

    on_state(&HandoffState::Exchanging);
    let (exchanged, access_token) = match exchange(session, &token).await {
        Ok(exchanged) => exchanged,
        Err(kind) => return fail(kind, &mut on_state),
    };
    if let Some(bearer) = access_token {
        session.credentials().set_fallback_token(&bearer);
    }
    history.replace(CALLBACK_PATH);

    let expected_subject = exchanged.subject_id().unwrap_or_default();
    for attempt in 0..policy.max_attempts {
        on_state(&HandoffState::Verifying { attempt: attempt + 1 });
        timer.sleep(policy.delay_for(attempt)).await;
        match session.query_identity().await {
            AuthState::Authenticated { user, .. } if user.subject_id() == expected_subject => {
                log!("session verified after {} attempt(s)", attempt + 1);
                on_state(&HandoffState::Redirecting);
                return HandoffOutcome::Redirect(DASHBOARD_PATH.to_owned());
            }
            AuthState::Authenticated { .. } => {
                warn!("session verification returned a different user");
                return fail(HandoffError::AuthFailed, &mut on_state);
            }
            AuthState::Unauthenticated => {
                log!("session not visible yet (attempt {})", attempt + 1);
            }
        }
    }

    warn!("session never became visible after {} attempts", policy.max_attempts);
    fail(HandoffError::NetworkError, &mut on_state)
}

async fn exchange<T: AuthTransport, C: CredentialStore>(
    session: &SessionService<T, C>,
    token: &str,
) -> Result<(AuthState, Option<String>), HandoffError> {
    let reply = match session.transport().create_session(token).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("session exchange request failed: {e}");
            return Err(HandoffError::NetworkError);
        }
    };
    if !reply.is_success() {
        warn!("session exchange rejected: status {}", reply.status);
        return Err(HandoffError::AuthFailed);
    }
    let body = reply.json::<SessionResponse>().map_err(|e| {
        warn!("session exchange reply unreadable: {e}");
        HandoffError::AuthFailed
    })?;
    let state = AuthState::from_me(&body.user);
    if state.is_authenticated() {
        let bearer = body.access_token.filter(|t| !t.trim().is_empty());
        Ok((state, bearer))
    } else {
        warn!("session exchange succeeded without an authenticated user");
        Err(HandoffError::AuthFailed)
    }
}

fn fail<F: FnMut(&HandoffState)>(kind: HandoffError, on_state: &mut F) -> HandoffOutcome {
    on_state(&HandoffState::Failed(kind));
    HandoffOutcome::Home(kind)
}
