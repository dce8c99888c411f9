//! Home route: sign-in prompt plus the handoff error banner.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::login_prompt::LoginPrompt;
use crate::components::skeleton::PageSkeleton;
use crate::config::DASHBOARD_PATH;
use crate::state::auth::GateBranch;
use crate::util::auth::use_auth_gate;
use crate::util::handoff::error_message;

#[component]
pub fn HomePage() -> impl IntoView {
    let gate = use_auth_gate();
    let query = use_query_map();
    let banner = move || banner_for(query.with(|q| q.get("error")).as_deref());

    view! {
        <div class="home-page">
            {move || {
                banner()
                    .map(|text| {
                        view! {
                            <div class="notice notice--error" role="alert">
                                {text}
                            </div>
                        }
                    })
            }}
            {move || match gate.branch() {
                GateBranch::Skeleton => view! { <PageSkeleton/> }.into_any(),
                GateBranch::LoginPrompt => view! { <LoginPrompt/> }.into_any(),
                GateBranch::Protected(user) => {
                    view! {
                        <section class="page page--welcome">
                            <div class="page__heading">
                                <h1>{format!("Welcome back, {}", user.display_name())}</h1>
                            </div>
                            <div class="page__body">
                                <a class="btn btn--primary" href=DASHBOARD_PATH>
                                    "Go to dashboard"
                                </a>
                            </div>
                        </section>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Banner text for the `error` query value; blank values show nothing.
pub(crate) fn banner_for(code: Option<&str>) -> Option<&'static str> {
    code.map(str::trim).filter(|c| !c.is_empty()).map(error_message)
}
