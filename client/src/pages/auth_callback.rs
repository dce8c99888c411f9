//! `/auth-callback`: consumes the handoff token and leaves the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend redirects here after Google sign-in with `?token=...`. The
//! page runs [`run_handoff`] exactly once per mount and renders its progress.
//! Success is a full page navigation so the dashboard starts from a fresh
//! document that carries the new cookie; failures go home in-app with an
//! `error` code.

use leptos::prelude::*;

use crate::util::handoff::HandoffState;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let state = RwSignal::new(HandoffState::Init);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use crate::util::browser::{BrowserHistory, BrowserTimer, full_navigate};
        use crate::util::handoff::{HandoffOutcome, VerifyPolicy, run_handoff};

        let navigate = use_navigate();
        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let session = crate::net::session::browser_session();
            let policy = VerifyPolicy::default();
            let outcome = run_handoff(&session, &BrowserHistory, &BrowserTimer, &policy, |next| {
                leptos::logging::log!("auth handoff: {next:?}");
                if alive_task.load(Ordering::Relaxed) {
                    state.set(next.clone());
                }
            })
            .await;

            if !alive_task.load(Ordering::Relaxed) {
                return;
            }
            match outcome {
                HandoffOutcome::Redirect(href) => full_navigate(&href),
                HandoffOutcome::Home(kind) => {
                    leptos::logging::warn!("auth handoff failed: {}", kind.code());
                    navigate(&kind.home_href(), NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <section class="page page--callback">
            <div class="page__heading">
                <h1>"Signing you in"</h1>
            </div>
            <div class="page__body">
                <div class="spinner" aria-hidden="true"></div>
                <p class="callback__status">{move || state.with(HandoffState::label)}</p>
            </div>
        </section>
    }
}
