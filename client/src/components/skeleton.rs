//! Neutral placeholder shown while an auth gate is still resolving.

use leptos::prelude::*;

/// Same outer frame as [`super::login_prompt::LoginPrompt`] and the protected
/// pages so nothing shifts when the gate resolves.
#[component]
pub fn PageSkeleton() -> impl IntoView {
    view! {
        <section class="page page--skeleton" aria-busy="true">
            <div class="page__heading">
                <div class="skeleton skeleton--title"></div>
            </div>
            <div class="page__body">
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--line skeleton--short"></div>
            </div>
        </section>
    }
}

/// Inline placeholder for the header's user slot.
#[component]
pub fn UserSkeleton() -> impl IntoView {
    view! {
        <div class="app-header__user app-header__user--skeleton" aria-busy="true">
            <div class="skeleton skeleton--avatar"></div>
            <div class="skeleton skeleton--line skeleton--short"></div>
        </div>
    }
}
