//! `/categories/:id`: emails filed under one category.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::email_list::EmailList;
use crate::components::login_prompt::LoginPrompt;
use crate::components::skeleton::PageSkeleton;
use crate::config::DASHBOARD_PATH;
use crate::state::auth::GateBranch;
use crate::state::categories::parse_category_id;
#[cfg(feature = "hydrate")]
use crate::state::categories::CategoriesState;
use crate::state::emails::EmailsState;
use crate::util::auth::use_auth_gate;

#[component]
pub fn CategoryPage() -> impl IntoView {
    let gate = use_auth_gate();
    let params = use_params_map();
    let category_id = move || params.with(|p| p.get("id")).as_deref().and_then(parse_category_id);

    view! {
        {move || match (gate.branch(), category_id()) {
            (GateBranch::Skeleton, _) => view! { <PageSkeleton/> }.into_any(),
            (GateBranch::LoginPrompt, _) => view! { <LoginPrompt/> }.into_any(),
            (GateBranch::Protected(_), None) => {
                view! {
                    <section class="page page--category">
                        <div class="page__heading">
                            <a class="page__back" href=DASHBOARD_PATH>
                                "← Back to dashboard"
                            </a>
                            <h1>"Category not found"</h1>
                        </div>
                    </section>
                }
                    .into_any()
            }
            (GateBranch::Protected(_), Some(id)) => view! { <CategoryContent id=id/> }.into_any(),
        }}
    }
}

#[component]
fn CategoryContent(id: i64) -> impl IntoView {
    let emails = RwSignal::new(EmailsState::loading());
    let name = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let next = match crate::net::api::category_emails(id).await {
                Ok(items) => EmailsState::loaded(items),
                Err(e) => {
                    leptos::logging::warn!("load category {id} emails failed: {e}");
                    EmailsState::failed(e.user_message("load emails"))
                }
            };
            let _ = emails.try_set(next);
        });
        leptos::task::spawn_local(async move {
            match crate::net::api::list_categories().await {
                Ok(items) => {
                    let mut listed = CategoriesState::default();
                    listed.replace_all(items);
                    let _ = name.try_set(listed.name_of(id).map(str::to_owned));
                }
                Err(e) => leptos::logging::warn!("load category names failed: {e}"),
            }
        });
    }

    view! {
        <section class="page page--category">
            <div class="page__heading">
                <a class="page__back" href=DASHBOARD_PATH>
                    "← Back to dashboard"
                </a>
                <h1>{move || name.with(|n| category_heading(n.as_deref(), id))}</h1>
                <span class="page__count">{move || emails.with(EmailsState::summary_label)}</span>
            </div>
            <div class="page__body">
                {move || {
                    let state = emails.get();
                    if state.loading {
                        view! { <p class="email-list__empty">"Loading emails..."</p> }.into_any()
                    } else if let Some(error) = state.error {
                        view! { <p class="page__error">{error}</p> }.into_any()
                    } else {
                        view! {
                            <EmailList
                                emails=Signal::derive(move || emails.with(|s| s.items.clone()))
                                empty_message="No emails in this category yet."
                            />
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

/// Category title, or a numbered placeholder until the name arrives.
pub(crate) fn category_heading(name: Option<&str>, id: i64) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => name.to_owned(),
        None => format!("Category #{id}"),
    }
}
