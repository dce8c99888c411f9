//! Client configuration constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base URL is baked in at compile time from `API_URL` so the same
//! bundle can talk to a backend on another origin. Everything else here is a
//! fixed name shared with the backend (cookie marker, storage key) or a
//! tuning knob for post-login session verification.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Name of the session cookie set by `POST /auth/session`.
pub const SESSION_COOKIE_NAME: &str = "jwt_session";

/// `localStorage` key holding the fallback bearer token.
pub const FALLBACK_TOKEN_KEY: &str = "jwt_token";

/// Route hosting the token handoff.
pub const CALLBACK_PATH: &str = "/auth-callback";

/// Route users land on after a completed login.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Wait before the first post-login identity check.
pub const VERIFY_INITIAL_DELAY: Duration = Duration::from_millis(500);

/// Upper bound for a single backoff wait while verifying the session.
pub const VERIFY_MAX_DELAY: Duration = Duration::from_secs(4);

/// Identity checks attempted before the handoff gives up.
pub const VERIFY_MAX_ATTEMPTS: u32 = 5;

/// Backend base URL, without a trailing slash. Empty means same origin.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("API_URL").unwrap_or(""))
}

/// Join an absolute API path (`/auth/me`) onto the configured base.
pub fn api_url(path: &str) -> String {
    join_url(api_base(), path)
}

fn normalize_base(raw: &str) -> &str {
    raw.trim().trim_end_matches('/')
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
