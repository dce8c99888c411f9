//! Thin seams over browser navigation, history and timers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The handoff flow needs to read and rewrite the address bar and to wait
//! between verification attempts. Those two concerns are traits so the flow
//! can run under tests; full-page navigation is a plain function because it
//! ends the current page and nothing observes its result.

use std::time::Duration;

/// Read and rewrite the current URL without navigating.
pub trait History {
    /// Current query string, including the leading `?` when present.
    fn query(&self) -> String;
    /// Replace the current history entry's URL with `path`.
    fn replace(&self, path: &str);
}

/// Cooperative sleep.
#[allow(async_fn_in_trait)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// `window.location` / `window.history` backed implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn query(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn replace(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}

/// `gloo-timers` backed sleep.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(duration).await;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
        }
    }
}

/// Full page navigation: drops every in-memory state and re-requests the
/// app shell so all later requests carry whatever cookies are now set.
pub fn full_navigate(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Reload the current page from the server.
pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
