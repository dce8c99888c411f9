//! Application header with the signed-in user and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once above the router outlet. It runs its own auth gate rather
//! than sharing one with the page below it.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::components::skeleton::UserSkeleton;
use crate::state::auth::{GateBranch, UserProfile};
use crate::util::auth::{login_url, start_login, use_auth_gate};

#[component]
pub fn AppHeader() -> impl IntoView {
    let gate = use_auth_gate();

    view! {
        <header class="app-header">
            <a class="app-header__title" href="/">
                "AI Email Sorter"
            </a>
            {move || match gate.branch() {
                GateBranch::Skeleton => view! { <UserSkeleton/> }.into_any(),
                GateBranch::LoginPrompt => {
                    view! {
                        <a
                            class="btn btn--primary app-header__login"
                            href=login_url()
                            on:click=move |ev| {
                                ev.prevent_default();
                                start_login();
                            }
                        >
                            "Sign in with Google"
                        </a>
                    }
                        .into_any()
                }
                GateBranch::Protected(user) => view! { <UserBadge user=user/> }.into_any(),
            }}
        </header>
    }
}

#[component]
fn UserBadge(user: UserProfile) -> impl IntoView {
    let busy = RwSignal::new(false);
    let initial = avatar_initial(user.display_name());

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::util::auth::logout_and_reload());
    };

    view! {
        <div class="app-header__user">
            {match user.avatar_url() {
                Some(src) => {
                    view! { <img class="app-header__avatar" src=src.to_owned() alt=""/> }
                        .into_any()
                }
                None => view! { <span class="app-header__avatar app-header__avatar--initial">{initial}</span> }.into_any(),
            }}
            <div class="app-header__identity">
                <span class="app-header__name">{user.display_name().to_owned()}</span>
                <span class="app-header__email">{user.email().to_owned()}</span>
            </div>
            <button class="btn app-header__logout" on:click=on_logout disabled=move || busy.get()>
                "Logout"
            </button>
        </div>
    }
}

/// Uppercased first character for the fallback avatar.
pub(crate) fn avatar_initial(name: &str) -> String {
    name.trim().chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_else(|| "?".to_owned())
}
