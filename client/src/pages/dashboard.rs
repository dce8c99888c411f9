//! Dashboard: categories, connected account, uncategorized mail and the
//! bulk actions that drive the backend sorter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated by this page's own auth gate. Data loads start only after the gate
//! resolves to a signed-in user, so signed-out visitors never hit the CRUD
//! endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every failed call becomes a visible notice or inline message; nothing is
//! retried automatically.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::add_category_dialog::AddCategoryDialog;
use crate::components::category_list::CategoryList;
use crate::components::connected_accounts::ConnectedAccounts;
use crate::components::email_list::EmailList;
use crate::components::login_prompt::LoginPrompt;
use crate::components::notice_banner::NoticeBanner;
use crate::components::skeleton::PageSkeleton;
use crate::net::types::Category;
use crate::state::auth::{GateBranch, UserProfile};
use crate::state::categories::{CategoriesState, Notice};
use crate::state::emails::{EmailsState, email_count_label};
use crate::util::auth::use_auth_gate;

/// Backend-side bulk actions triggered from the dashboard toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardAction {
    Categorize,
    AddAccount,
    EnableNotifications,
}

impl DashboardAction {
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Categorize => "AI Categorize",
            Self::AddAccount => "Add account",
            Self::EnableNotifications => "Enable auto-fetch",
        }
    }

    /// Phrase used in failure notices ("Failed to <verb>: ...").
    pub fn verb(self) -> &'static str {
        match self {
            Self::Categorize => "categorize emails",
            Self::AddAccount => "add account",
            Self::EnableNotifications => "enable notifications",
        }
    }

    pub fn success_fallback(self) -> &'static str {
        match self {
            Self::Categorize => "Emails categorized.",
            Self::AddAccount => "Account added.",
            Self::EnableNotifications => "Auto-fetch enabled.",
        }
    }

    /// Actions that move mail between categories and so stale both lists.
    pub fn refreshes_lists(self) -> bool {
        matches!(self, Self::Categorize | Self::AddAccount)
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let gate = use_auth_gate();

    view! {
        {move || match gate.branch() {
            GateBranch::Skeleton => view! { <PageSkeleton/> }.into_any(),
            GateBranch::LoginPrompt => view! { <LoginPrompt/> }.into_any(),
            GateBranch::Protected(user) => {
                view! { <DashboardContent user=user provider_linked=gate.provider_linked()/> }.into_any()
            }
        }}
    }
}

#[component]
fn DashboardContent(user: UserProfile, provider_linked: bool) -> impl IntoView {
    let categories = RwSignal::new(CategoriesState { loading: true, ..CategoriesState::default() });
    let uncategorized = RwSignal::new(EmailsState::loading());
    let busy = RwSignal::new(false);
    let show_add = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        load_categories(categories);
        load_uncategorized(uncategorized);
    }

    let run_action = Callback::new(move |action: DashboardAction| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match action {
                DashboardAction::Categorize => crate::net::api::categorize_emails().await,
                DashboardAction::AddAccount => crate::net::api::add_account().await,
                DashboardAction::EnableNotifications => crate::net::api::enable_notifications().await,
            };
            if let Err(e) = &result {
                leptos::logging::warn!("{} failed: {e}", action.verb());
            }
            let refresh = result.is_ok() && action.refreshes_lists();
            let notice = Notice::from_action(action.verb(), action.success_fallback(), &result);
            let _ = categories.try_update(|s| s.notice = Some(notice));
            let _ = busy.try_set(false);
            if refresh {
                load_categories(categories);
                load_uncategorized(uncategorized);
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = action;
            busy.set(false);
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_category(id).await;
            let succeeded = result.is_ok();
            let notice = Notice::from_action("delete category", "Category deleted.", &result);
            let _ = categories.try_update(|s| {
                if succeeded {
                    s.remove(id);
                }
                s.notice = Some(notice);
            });
            if succeeded {
                load_uncategorized(uncategorized);
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_created = Callback::new(move |category: Category| {
        let notice = Notice::Success(format!("Category \"{}\" added.", category.name));
        categories.update(|s| {
            s.upsert(category);
            s.notice = Some(notice);
        });
        show_add.set(false);
    });

    let action_button = move |action: DashboardAction| {
        view! {
            <button class="btn" disabled=move || busy.get() on:click=move |_| run_action.run(action)>
                {action.button_label()}
            </button>
        }
    };

    view! {
        <section class="page page--dashboard">
            <div class="page__heading">
                <div>
                    <h1>"Dashboard"</h1>
                    <span class="page__count">
                        {move || {
                            let total = categories.with(CategoriesState::total_emails);
                            format!("{} sorted", email_count_label(total as usize))
                        }}
                    </span>
                </div>
                <div class="dashboard__actions">
                    {action_button(DashboardAction::Categorize)}
                    {action_button(DashboardAction::EnableNotifications)}
                </div>
            </div>
            <div class="page__body">
                <NoticeBanner
                    notice=Signal::derive(move || categories.with(|s| s.notice.clone()))
                    on_dismiss=Callback::new(move |()| categories.update(|s| s.notice = None))
                />
                <Show when=move || categories.with(|s| s.error.is_some())>
                    <p class="dashboard__error">{move || categories.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
                <div class="dashboard__grid">
                    <ConnectedAccounts
                        user=user
                        provider_linked=provider_linked
                        busy=busy.into()
                        on_add_account=Callback::new(move |()| run_action.run(DashboardAction::AddAccount))
                    />
                    <CategoryList
                        categories=Signal::derive(move || categories.with(|s| s.items.clone()))
                        loading=Signal::derive(move || categories.with(|s| s.loading))
                        on_add=Callback::new(move |()| show_add.set(true))
                        on_delete=on_delete
                    />
                </div>
                <section class="dashboard__uncategorized">
                    <div class="dashboard__section-header">
                        <h2>"Uncategorized Emails"</h2>
                        <span class="dashboard__count">{move || uncategorized.with(EmailsState::summary_label)}</span>
                    </div>
                    {move || {
                        let state = uncategorized.get();
                        if state.loading {
                            view! { <p class="email-list__empty">"Loading emails..."</p> }.into_any()
                        } else if let Some(error) = state.error {
                            view! { <p class="dashboard__error">{error}</p> }.into_any()
                        } else {
                            view! {
                                <EmailList
                                    emails=Signal::derive(move || uncategorized.with(|s| s.items.clone()))
                                    empty_message="All emails categorized!"
                                />
                            }
                                .into_any()
                        }
                    }}
                </section>
            </div>
            <Show when=move || show_add.get()>
                <AddCategoryDialog on_cancel=Callback::new(move |()| show_add.set(false)) on_created=on_created/>
            </Show>
        </section>
    }
}

#[cfg(feature = "hydrate")]
fn load_categories(categories: RwSignal<CategoriesState>) {
    let _ = categories.try_update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        let result = crate::net::api::list_categories().await;
        let _ = categories.try_update(|s| match result {
            Ok(items) => s.replace_all(items),
            Err(e) => {
                leptos::logging::warn!("load categories failed: {e}");
                s.loading = false;
                s.error = Some(e.user_message("load categories"));
            }
        });
    });
}

#[cfg(feature = "hydrate")]
fn load_uncategorized(emails: RwSignal<EmailsState>) {
    leptos::task::spawn_local(async move {
        let next = match crate::net::api::uncategorized_emails().await {
            Ok(items) => EmailsState::loaded(items),
            Err(e) => {
                leptos::logging::warn!("load uncategorized emails failed: {e}");
                EmailsState::failed(e.user_message("load uncategorized emails"))
            }
        };
        let _ = emails.try_set(next);
    });
}
