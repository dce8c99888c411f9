//! Auth gate hook shared by every protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each view that depends on identity calls [`use_auth_gate`] once when it
//! mounts. The gate owns its own signal and its own identity query, so two
//! views mounted together never act on each other's result and a logout can
//! never leave a stale shared state behind.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::config::api_url;
use crate::state::auth::{GateBranch, GateStatus, UserProfile};
use crate::util::browser::{full_navigate, reload_page};

/// Per-mount auth resolution handle.
#[derive(Clone, Copy, Debug)]
pub struct AuthGate {
    status: RwSignal<GateStatus>,
}

impl AuthGate {
    /// True until this mount's first identity check completes.
    pub fn loading(&self) -> bool {
        self.status.with(GateStatus::loading)
    }

    pub fn status(&self) -> GateStatus {
        self.status.get()
    }

    pub fn branch(&self) -> GateBranch {
        self.status.with(GateStatus::branch)
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.status.with(|s| s.user().cloned())
    }

    pub fn provider_linked(&self) -> bool {
        self.status.with(|s| matches!(s, GateStatus::Resolved(state) if state.provider_linked()))
    }
}

/// Start identity resolution for the calling view.
///
/// The query runs once per mount. A result that arrives after the view
/// unmounted is dropped.
pub fn use_auth_gate() -> AuthGate {
    let status = RwSignal::new(GateStatus::Loading);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let state = crate::net::session::browser_session().query_identity().await;
            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                status.set(GateStatus::Resolved(state));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    AuthGate { status }
}

/// Backend endpoint that starts the Google sign-in flow.
pub fn login_url() -> String {
    api_url("/auth/google/login")
}

/// Leave the app for the identity provider.
pub fn start_login() {
    full_navigate(&login_url());
}

/// End the session, then reload so no view keeps a signed-in state.
pub async fn logout_and_reload() {
    if let Err(e) = crate::net::session::browser_session().logout().await {
        leptos::logging::warn!("logout request failed: {e}");
    }
    reload_page();
}
