//! Shared wire-protocol DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror backend JSON payloads. Auth payloads stay loose here
//! (optional fields, defaults) and are tightened into `state::auth` types at
//! the edge so a partial body can never produce a half-populated session.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `GET /auth/me`, also embedded in the session exchange reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<WireUser>,
    #[serde(default)]
    pub google_connected: Option<bool>,
    /// Backend diagnostic for signed-out replies (`no_session_cookie`, ...).
    #[serde(default)]
    pub reason: Option<String>,
}

/// User record as the backend serializes it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireUser {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub sub: String,
}

/// Request body for `POST /auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionRequest<'a> {
    pub token: &'a str,
}

/// Reply from `POST /auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub status: String,
    pub user: MeResponse,
    /// Bearer credential issued alongside the cookie, when the backend
    /// provides one. Distinct from the handoff token.
    #[serde(default)]
    pub access_token: Option<String>,
}

/// An email category with its current message count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email_count: u32,
    #[serde(default)]
    pub created_at: String,
}

/// Request body for `POST /emails/categories`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

/// A fetched email summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub id: i64,
    #[serde(default)]
    pub gmail_id: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub sender_email: String,
    #[serde(default)]
    pub body_preview: String,
    #[serde(default)]
    pub received_at: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl Email {
    /// Sender label for list rows: display name, else address.
    pub fn sender_label(&self) -> &str {
        if self.sender.trim().is_empty() { &self.sender_email } else { &self.sender }
    }

    /// `YYYY-MM-DD` prefix of the received timestamp, or the raw value.
    pub fn received_date(&self) -> &str {
        self.received_at.get(..10).unwrap_or(&self.received_at)
    }
}

/// Generic `{status, message}` reply from action endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}
