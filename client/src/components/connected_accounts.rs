//! Connected Gmail accounts panel.
//!
//! The backend exposes no account listing, so the signed-in user is shown as
//! the single primary account.

use leptos::prelude::*;

use crate::state::auth::UserProfile;

#[component]
pub fn ConnectedAccounts(
    user: UserProfile,
    provider_linked: bool,
    busy: Signal<bool>,
    on_add_account: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="connected-accounts">
            <div class="connected-accounts__header">
                <h2>"Connected Accounts"</h2>
                <button class="btn" disabled=move || busy.get() on:click=move |_| on_add_account.run(())>
                    "+ Add account"
                </button>
            </div>
            <ul class="connected-accounts__items">
                <li class="connected-accounts__item">
                    <span class="connected-accounts__email">{user.email().to_owned()}</span>
                    <span class="connected-accounts__badge">"Primary"</span>
                    <Show when=move || !provider_linked>
                        <span class="connected-accounts__warning">"Gmail access not granted"</span>
                    </Show>
                </li>
            </ul>
        </section>
    }
}
