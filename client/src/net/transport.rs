//! HTTP transport for the auth endpoints.
//!
//! Client-side (hydrate): real requests via `gloo-net`, always with
//! `credentials: include` so the backend session cookie travels along.
//! Server-side (SSR): every call reports [`TransportError::Unavailable`].
//!
//! DESIGN
//! ======
//! The transport only moves bytes and reports status codes. Deciding what a
//! reply means (signed in, signed out, failed exchange) belongs to
//! `net::session` and `util::handoff`, which run against this trait so they
//! can be driven by scripted replies in tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::de::DeserializeOwned;

/// Status code and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// A request that never produced a [`Reply`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// The three auth endpoints the session core talks to.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    /// `GET /auth/me`, optionally carrying `Authorization: Bearer <token>`.
    async fn me(&self, bearer: Option<&str>) -> Result<Reply, TransportError>;
    /// `POST /auth/session` with `{ "token": ... }`.
    async fn create_session(&self, token: &str) -> Result<Reply, TransportError>;
    /// `POST /auth/logout`.
    async fn logout(&self) -> Result<Reply, TransportError>;
}

/// `gloo-net` transport used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
pub(crate) async fn read_reply(
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<Reply, TransportError> {
    let resp = sent.map_err(|e| TransportError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
    Ok(Reply { status, body })
}

impl AuthTransport for GlooTransport {
    async fn me(&self, bearer: Option<&str>) -> Result<Reply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use web_sys::{RequestCache, RequestCredentials};

            let mut req = gloo_net::http::Request::get(&crate::config::api_url("/auth/me"))
                .credentials(RequestCredentials::Include)
                .cache(RequestCache::NoStore)
                .header("cache-control", "no-cache")
                .header("pragma", "no-cache");
            if let Some(token) = bearer {
                req = req.header("Authorization", &bearer_header(token));
            }
            read_reply(req.send().await).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = bearer;
            Err(TransportError::Unavailable)
        }
    }

    async fn create_session(&self, token: &str) -> Result<Reply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use web_sys::RequestCredentials;

            let req = gloo_net::http::Request::post(&crate::config::api_url("/auth/session"))
                .credentials(RequestCredentials::Include)
                .json(&crate::net::types::SessionRequest { token })
                .map_err(|e| TransportError::Network(e.to_string()))?;
            read_reply(req.send().await).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(TransportError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<Reply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use web_sys::RequestCredentials;

            let req = gloo_net::http::Request::post(&crate::config::api_url("/auth/logout"))
                .credentials(RequestCredentials::Include);
            read_reply(req.send().await).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(TransportError::Unavailable)
        }
    }
}
