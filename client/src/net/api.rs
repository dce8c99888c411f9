//! REST API helpers for the email and category endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, cookies included.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Any non-2xx reply becomes
//! [`ApiError::Status`] and pages turn it into a visible notice.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::Reply;
use super::types::{ActionResponse, Category, Email, NewCategory};

/// Failure of a CRUD/action call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned {status}")]
    Status { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Notice text for a failed `action` ("load categories", ...).
    pub fn user_message(&self, action: &str) -> String {
        match self {
            Self::Status { status: 401 | 403, .. } => {
                format!("Failed to {action}: your session has expired. Please sign in again.")
            }
            Self::Status { status, body } if !body.trim().is_empty() => {
                format!("Failed to {action} ({status}): {}", detail_of(body))
            }
            Self::Status { status, .. } => format!("Failed to {action} ({status})."),
            Self::Network(_) | Self::Unavailable => {
                format!("Failed to {action}: the server could not be reached.")
            }
            Self::Decode(_) => format!("Failed to {action}: unexpected server response."),
        }
    }
}

/// FastAPI-style `{"detail": "..."}` bodies are unwrapped; anything else is
/// shown verbatim.
fn detail_of(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct Detail {
        detail: String,
    }
    serde_json::from_str::<Detail>(body).map_or_else(|_| body.trim().to_owned(), |d| d.detail)
}

pub(crate) fn category_path(id: i64) -> String {
    format!("/emails/categories/{id}")
}

pub(crate) fn category_emails_path(id: i64) -> String {
    format!("/emails/category/{id}")
}

pub(crate) fn decode_reply<T: DeserializeOwned>(reply: &Reply) -> Result<T, ApiError> {
    if !reply.is_success() {
        return Err(ApiError::Status { status: reply.status, body: reply.body.clone() });
    }
    reply.json::<T>().map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Delete,
}

async fn send<T, B>(verb: Verb, path: &str, body: Option<&B>) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let url = crate::config::api_url(path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Delete => Request::delete(&url),
        }
        .credentials(RequestCredentials::Include);
        let sent = match body {
            Some(body) => builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?.send().await,
            None => builder.send().await,
        };
        let reply = super::transport::read_reply(sent)
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_reply(&reply)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body);
        Err(ApiError::Unavailable)
    }
}

/// `GET /emails/categories`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or bad JSON.
pub async fn list_categories() -> Result<Vec<Category>, ApiError> {
    send::<_, ()>(Verb::Get, "/emails/categories", None).await
}

/// `POST /emails/categories`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or bad JSON.
pub async fn create_category(category: &NewCategory) -> Result<Category, ApiError> {
    send(Verb::Post, "/emails/categories", Some(category)).await
}

/// `DELETE /emails/categories/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or bad JSON.
pub async fn delete_category(id: i64) -> Result<ActionResponse, ApiError> {
    send::<_, ()>(Verb::Delete, &category_path(id), None).await
}

/// `GET /emails/category/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or bad JSON.
pub async fn category_emails(id: i64) -> Result<Vec<Email>, ApiError> {
    send::<_, ()>(Verb::Get, &category_emails_path(id), None).await
}

/// `GET /emails/uncategorized`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or bad JSON.
pub async fn uncategorized_emails() -> Result<Vec<Email>, ApiError> {
    send::<_, ()>(Verb::Get, "/emails/uncategorized", None).await
}

/// `POST /emails/categorize`: run AI categorization on pending emails.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or bad JSON.
pub async fn categorize_emails() -> Result<ActionResponse, ApiError> {
    send::<_, ()>(Verb::Post, "/emails/categorize", None).await
}

/// `POST /emails/add-account`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or bad JSON.
pub async fn add_account() -> Result<ActionResponse, ApiError> {
    send::<_, ()>(Verb::Post, "/emails/add-account", None).await
}

/// `POST /gmail-setup/enable-notifications`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or bad JSON.
pub async fn enable_notifications() -> Result<ActionResponse, ApiError> {
    send::<_, ()>(Verb::Post, "/gmail-setup/enable-notifications", None).await
}
