//! Session query service: the single canonical "who am I" check.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected view, the header, and the post-login verification step
//! resolve identity through [`SessionService::query_identity`]. The service
//! tries the backend session cookie first and only falls back to the stored
//! bearer token when the cookie attempt failed and no cookie was visible.
//!
//! ERROR HANDLING
//! ==============
//! `query_identity` has no error channel. Transport failures, non-2xx
//! replies and unreadable bodies all resolve to `Unauthenticated`; the auth
//! gate turns that into a login prompt.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::logging::{log, warn};

use super::transport::{AuthTransport, GlooTransport, Reply, TransportError};
use super::types::MeResponse;
use crate::state::auth::AuthState;
use crate::util::credentials::{BrowserCredentials, CredentialStore};

/// Identity queries and session teardown over a transport + credential store.
#[derive(Clone, Debug, Default)]
pub struct SessionService<T, C> {
    transport: T,
    credentials: C,
}

/// The service wired to the real browser.
pub type BrowserSession = SessionService<GlooTransport, BrowserCredentials>;

/// Build the browser-backed session service.
pub fn browser_session() -> BrowserSession {
    SessionService::new(GlooTransport, BrowserCredentials)
}

impl<T: AuthTransport, C: CredentialStore> SessionService<T, C> {
    pub fn new(transport: T, credentials: C) -> Self {
        Self { transport, credentials }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    /// Resolve the current identity. Never fails; see module docs.
    ///
    /// Sequence:
    /// 1. cookie-only request;
    /// 2. if that failed, no cookie marker is visible, and a fallback token
    ///    is stored: one retry with `Authorization: Bearer`;
    /// 3. if every attempt failed, or the bearer retry still did not yield
    ///    an identity, the fallback token is cleared.
    pub async fn query_identity(&self) -> AuthState {
        let cookie_seen = self.credentials.has_session_cookie_marker();
        log!("identity check: session cookie visible={cookie_seen}");

        let mut used_fallback = false;
        let mut reply = self.transport.me(None).await;
        if !attempt_succeeded(&reply) && !cookie_seen {
            if let Some(token) = self.credentials.fallback_token() {
                log!("identity check: cookie auth failed, retrying with stored token");
                used_fallback = true;
                reply = self.transport.me(Some(&token)).await;
            }
        }

        let state = match reply {
            Ok(reply) if reply.is_success() => parse_identity(&reply),
            Ok(reply) => {
                warn!("identity check failed: status {}", reply.status);
                self.credentials.clear_fallback_token();
                return AuthState::Unauthenticated;
            }
            Err(e) => {
                warn!("identity request failed: {e}");
                self.credentials.clear_fallback_token();
                return AuthState::Unauthenticated;
            }
        };
        // A bearer token the backend answered but did not accept is stale.
        if used_fallback && !state.is_authenticated() {
            self.credentials.clear_fallback_token();
        }
        state
    }

    /// End the backend session and forget the fallback token.
    ///
    /// The caller is expected to force a full page reload afterwards.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the logout request never completed.
    /// The fallback token is cleared either way.
    pub async fn logout(&self) -> Result<(), TransportError> {
        self.credentials.clear_fallback_token();
        let reply = self.transport.logout().await?;
        if !reply.is_success() {
            warn!("logout returned status {}", reply.status);
        }
        Ok(())
    }
}

fn attempt_succeeded(reply: &Result<Reply, TransportError>) -> bool {
    reply.as_ref().is_ok_and(Reply::is_success)
}

fn parse_identity(reply: &Reply) -> AuthState {
    match reply.json::<MeResponse>() {
        Ok(body) => AuthState::from_me(&body),
        Err(e) => {
            warn!("identity reply was not valid JSON: {e}");
            AuthState::Unauthenticated
        }
    }
}
