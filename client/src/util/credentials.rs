//! Browser credential locations: the session cookie marker and the fallback
//! bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session cookie itself is owned by the backend; the client may only
//! observe whether a cookie with the marker name is visible in
//! `document.cookie`. The fallback token lives in `localStorage` and is the
//! only credential the client writes.
//!
//! ERROR HANDLING
//! ==============
//! Storage can be missing (SSR, private mode, sandboxed iframes). Every read
//! then reports "absent" and every write is a silent no-op.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::cell::RefCell;

#[cfg(feature = "hydrate")]
use crate::config::{FALLBACK_TOKEN_KEY, SESSION_COOKIE_NAME};

/// Read/write access to the two client-side credential locations.
pub trait CredentialStore {
    /// Whether a session cookie with the marker name is visible. Says nothing
    /// about whether the backend still accepts it.
    fn has_session_cookie_marker(&self) -> bool;
    fn fallback_token(&self) -> Option<String>;
    fn set_fallback_token(&self, token: &str);
    fn clear_fallback_token(&self);
}

/// `document.cookie` + `localStorage` backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCredentials;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for BrowserCredentials {
    fn has_session_cookie_marker(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return false;
            };
            let Ok(html) = document.dyn_into::<web_sys::HtmlDocument>() else {
                return false;
            };
            html.cookie()
                .map_or(false, |cookies| cookie_has_marker(&cookies, SESSION_COOKIE_NAME))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn fallback_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let token = local_storage()?.get_item(FALLBACK_TOKEN_KEY).ok().flatten()?;
            (!token.is_empty()).then_some(token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_fallback_token(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(FALLBACK_TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear_fallback_token(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(FALLBACK_TOKEN_KEY);
            }
        }
    }
}

/// In-process store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    cookie_marker: RefCell<bool>,
    token: RefCell<Option<String>>,
}

impl MemoryCredentials {
    pub fn new(cookie_marker: bool, token: Option<&str>) -> Self {
        Self {
            cookie_marker: RefCell::new(cookie_marker),
            token: RefCell::new(token.map(str::to_owned)),
        }
    }

    pub fn set_cookie_marker(&self, present: bool) {
        *self.cookie_marker.borrow_mut() = present;
    }
}

impl CredentialStore for MemoryCredentials {
    fn has_session_cookie_marker(&self) -> bool {
        *self.cookie_marker.borrow()
    }

    fn fallback_token(&self) -> Option<String> {
        self.token.borrow().clone().filter(|t| !t.is_empty())
    }

    fn set_fallback_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear_fallback_token(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Whether a `document.cookie` string carries a cookie named `name`.
pub fn cookie_has_marker(cookies: &str, name: &str) -> bool {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .any(|(key, _)| key.trim() == name)
}
